//! Drives a panel through a scripted session: docking, a drawer slide, a
//! tap back to full size and a swipe off screen. Every step is logged.

use dragpanel_testing::{FakeDragHelper, FakeSurface};
use dragpanel_ui::{
    ContentAttacher, DraggableListener, DraggablePanel, IntSize, PanelError, PanelSettings,
    PanelSlot, Point, PointerEvent, PointerEventKind, ViewSurface,
};

const SCREEN: IntSize = IntSize::new(1080, 1920);

/// Content handles are just labels here.
struct LabelAttacher;

impl ContentAttacher<&'static str> for LabelAttacher {
    type Surface = FakeSurface;

    fn attach(&mut self, slot: PanelSlot, content: &'static str) -> FakeSurface {
        log::info!("attaching {content:?} to {slot:?}");
        match slot {
            PanelSlot::Top => FakeSurface::new(IntSize::new(SCREEN.width, 608)),
            PanelSlot::Bottom => FakeSurface::new(IntSize::new(SCREEN.width, SCREEN.height - 608)),
        }
    }
}

struct LogListener;

impl DraggableListener for LogListener {
    fn on_maximized(&mut self) {
        log::info!("listener: maximized");
    }

    fn on_minimized(&mut self) {
        log::info!("listener: minimized");
    }

    fn on_closed_to_left(&mut self) {
        log::info!("listener: closed to the left");
    }

    fn on_closed_to_right(&mut self) {
        log::info!("listener: closed to the right");
    }
}

type DemoPanel = DraggablePanel<&'static str, LabelAttacher, FakeDragHelper>;

/// Host-side routing: the panel gets the stream once it intercepts.
struct Host {
    panel: DemoPanel,
    intercepting: bool,
}

impl Host {
    fn send(&mut self, kind: PointerEventKind, x: f32, y: f32) -> Result<(), PanelError> {
        let event = PointerEvent::new(kind, Point::new(x, y));
        let view = self.panel.view_mut()?;
        if kind == PointerEventKind::Down {
            self.intercepting = false;
        }
        if !self.intercepting {
            self.intercepting = view.on_intercept_touch_event(&event);
        }
        if self.intercepting {
            view.on_touch_event(&event);
        }
        if event.is_terminal() {
            self.intercepting = false;
        }
        view.on_layout(SCREEN);
        Ok(())
    }

    fn swipe(&mut self, from: (f32, f32), to: (f32, f32)) -> Result<(), PanelError> {
        const STEPS: usize = 12;
        self.send(PointerEventKind::Down, from.0, from.1)?;
        for step in 1..=STEPS {
            let t = step as f32 / STEPS as f32;
            self.send(
                PointerEventKind::Move,
                from.0 + (to.0 - from.0) * t,
                from.1 + (to.1 - from.1) * t,
            )?;
        }
        self.send(PointerEventKind::Up, to.0, to.1)
    }

    fn tap(&mut self, x: f32, y: f32) -> Result<(), PanelError> {
        self.send(PointerEventKind::Down, x, y)?;
        self.send(PointerEventKind::Up, x, y)
    }

    fn settle(&mut self) -> Result<(), PanelError> {
        let view = self.panel.view_mut()?;
        let mut frames = 0;
        while view.compute_scroll() {
            view.on_layout(SCREEN);
            frames += 1;
        }
        view.on_layout(SCREEN);
        let primary = view.primary();
        log::info!(
            "settled in {frames} frames: state={:?} bounds={:?} scale={:.2} background={}",
            view.state(),
            primary.bounds(),
            primary.scale_x(),
            view.background_alpha()
        );
        Ok(())
    }
}

fn run() -> Result<(), PanelError> {
    let settings = PanelSettings::default()
        .with_top_view_height(608)
        .with_margins(24, 24)
        .with_click_to_maximize(true);
    let mut panel = DemoPanel::with_settings(FakeDragHelper::new(), settings);
    panel.set_attacher(LabelAttacher);
    panel.set_top_content("video player");
    panel.set_bottom_content("episode list");
    panel.set_draggable_listener(LogListener);
    panel.initialize_view()?;
    panel.view_mut()?.on_layout(SCREEN);

    let mut host = Host {
        panel,
        intercepting: false,
    };

    log::info!("-- drag the player below the middle");
    host.swipe((540.0, 300.0), (540.0, 1300.0))?;
    host.settle()?;

    log::info!("-- a drawer slides over the screen");
    host.panel.slide_horizontally(0.6, 648.0, SCREEN.width)?;
    host.settle()?;
    host.panel.slide_horizontally(0.0, 0.0, SCREEN.width)?;

    log::info!("-- tap the docked player");
    host.tap(900.0, 1700.0)?;
    host.settle()?;

    log::info!("-- minimize and swipe it off to the left");
    host.panel.minimize()?;
    host.settle()?;
    host.swipe((900.0, 1700.0), (100.0, 1700.0))?;
    host.settle()?;

    log::info!("closed at left: {}", host.panel.is_closed_at_left()?);
    Ok(())
}

fn main() {
    #[cfg(all(feature = "logging", not(target_arch = "wasm32")))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Draggable panel demo ===");

    if let Err(err) = run() {
        log::error!("demo failed: {err}");
        std::process::exit(1);
    }
}
