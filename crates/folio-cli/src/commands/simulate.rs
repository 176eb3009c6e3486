use std::time::Duration;

use anyhow::Result;
use tracing::info;

use folio_core::{AppConfig, PageLayout, ScrollOutcome, Viewport};

/// Drive one anchor animation with synthetic frame timestamps and print
/// every frame's offset
pub fn run(config: &AppConfig, anchor: &str, from: f64, fps: Option<u32>, rows: u16) -> Result<()> {
    let mut scroll = config.scroll.clone();
    if let Some(fps) = fps {
        scroll.animation_fps = fps;
    }

    let page = PageLayout::new(rows);
    let mut viewport = Viewport::new(&scroll);
    viewport.set_extent(page.content_height(), f64::from(rows));
    viewport.set_offset(from);

    let start = viewport.offset();
    match viewport.scroll_to_anchor(&page, anchor) {
        ScrollOutcome::TargetNotFound => {
            let anchors = page.anchors();
            println!("No anchor named '{}'; offset stays at {:.1}", anchor, start);
            println!("Anchors: {}", anchors.join(", "));
            return Ok(());
        }
        ScrollOutcome::Jumped => {
            println!(
                "Smooth scrolling is off: jumped from {:.1} to {:.1}",
                start,
                viewport.offset()
            );
            return Ok(());
        }
        ScrollOutcome::Started(id) => {
            info!("Simulating animation {} to '{}'", id, anchor);
        }
    }

    let interval = scroll.frame_interval();
    let mut now = Duration::ZERO;
    let mut frames = 0u32;

    println!("{:>6}  {:>8}  {:>9}", "frame", "t (ms)", "offset");
    while viewport.is_animating() {
        viewport.run_frame(now);
        println!("{:>6}  {:>8}  {:>9.2}", frames, now.as_millis(), viewport.offset());
        now += interval;
        frames += 1;
    }

    println!(
        "\n'{}': {:.1} -> {:.1} in {} frames",
        anchor,
        start,
        viewport.offset(),
        frames
    );

    Ok(())
}
