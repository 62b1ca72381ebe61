mod render;

use std::io;
use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use timedial_engine::logging::{init_logging, LoggingConfig};
use timedial_engine::text::{FontSystem, MonospaceMeasure, TextMeasure};
use timedial_ui::config::{load_config, IndicatorConfig};
use timedial_ui::constraints::Constraints;
use timedial_ui::scene::UiScene;
use timedial_ui::TimeIndicator;

use crate::render::TerminalRenderer;

/// Countdown start used when the config does not set one: 1d 1h 1m 1s.
const DEMO_COUNTDOWN_MS: i64 = 90_061_000;

const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

/// Usage: `timedial-studio [config.json]`
fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => IndicatorConfig::from_path(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => load_config(),
    };

    let mut indicator = TimeIndicator::from_config(&config);
    if config.start_time.is_none() {
        indicator.set_start_time(default_start_time(config.countdown)?);
    }
    log::info!(
        "pattern {:?}, {} mode, {:?} interval",
        config.pattern,
        if config.countdown { "countdown" } else { "forward" },
        indicator.interval(),
    );

    match read_system_font() {
        Some(bytes) => {
            let mut fonts = FontSystem::new();
            let font = fonts.load_font(&bytes)?;
            let mut style = indicator.style().clone();
            style.font = font;
            indicator.set_style(style);
            run(&mut indicator, UiScene::new(fonts))
        }
        None => {
            log::info!("no system font found, measuring monospace");
            run(&mut indicator, UiScene::new(MonospaceMeasure::default()))
        }
    }
}

/// Drives the indicator until a countdown finishes. Forward clocks run until
/// interrupted.
fn run<M: TextMeasure>(indicator: &mut TimeIndicator, mut scene: UiScene<M>) -> anyhow::Result<()> {
    let mut renderer = TerminalRenderer::new(io::stdout().lock());

    let (rect, list) = scene.frame(&*indicator, Constraints::unbounded());
    log::debug!("indicator size {:?}", rect.size);
    renderer.render(list)?;

    indicator.start(Instant::now());
    while let Some(deadline) = indicator.next_deadline() {
        std::thread::sleep(deadline.saturating_duration_since(Instant::now()));
        if indicator.tick(Instant::now()) {
            let (_, list) = scene.frame(&*indicator, Constraints::unbounded());
            renderer.render(list)?;
        }
    }

    renderer.finish()?;
    log::info!("finished");
    Ok(())
}

fn default_start_time(countdown: bool) -> anyhow::Result<i64> {
    if countdown {
        return Ok(DEMO_COUNTDOWN_MS);
    }
    let since_epoch = SystemTime::now().duration_since(UNIX_EPOCH).context("system clock before 1970")?;
    Ok(i64::try_from(since_epoch.as_millis())?)
}

fn read_system_font() -> Option<Vec<u8>> {
    FONT_CANDIDATES.iter().find_map(|p| std::fs::read(p).ok())
}
