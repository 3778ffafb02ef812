#![forbid(unsafe_code)]

//! Folio demo binary entry point.

mod cli;
mod session;

use folio::prelude::*;

fn main() {
    folio::logging::init();
    let opts = cli::Opts::parse();

    let config = match session::config(&opts) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(
        font = %config.font.css(),
        viewport_width = config.viewport_width,
        viewport_height = config.viewport_height,
        "starting demo session"
    );

    let measure = folio::CachedMeasure::new(MonospaceMeasure::default());
    let mut editor = match Editor::new(config, measure) {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to initialize: {}", Error::from(e));
            std::process::exit(1);
        }
    };

    let mut input = InputAdapter::new();
    let origin = editor.layout().page(0).content_origin();
    let steps = session::script(&opts.text, origin, editor.metrics().line_height);
    for frame in session::play(&mut editor, &mut input, &steps) {
        println!("{frame}");
    }

    println!();
    print!("{}", session::dump_layout(&editor));

    let stats = editor.measurer().cache().stats();
    tracing::info!(
        hits = stats.hits,
        misses = stats.misses,
        hit_rate = stats.hit_rate(),
        "width cache"
    );
}
