use anyhow::Context as _;
use gpui::{
    App, AppContext, Application, Bounds, Context, Entity, TitlebarOptions, Window, WindowBounds,
    WindowOptions, div, point, prelude::*, px, size,
};
use tracing_subscriber::EnvFilter;

use gpui_slider::{
    components::{Slider, SliderContainer, SliderOptions},
    theme::{Theme, ThemeExt, ThemeOverrides, ThemePreset, resolve_theme},
};

struct Root {
    volume: Entity<Slider>,
    balance: Entity<Slider>,
    locked: Entity<Slider>,
}

impl Root {
    fn new(cx: &mut Context<Self>) -> Self {
        let volume = cx.new(|cx| {
            Slider::new(
                SliderOptions::new()
                    .id("volume")
                    .position(40., 80.)
                    .value(85.)
                    .tooltip("Volume")
                    .on_update(|_event, slider, _window, _cx| {
                        tracing::info!(value = slider.value(), "volume changed");
                    }),
                cx,
            )
        });

        let balance = cx.new(|cx| {
            Slider::new(
                SliderOptions::new()
                    .id("balance")
                    .position(40., 160.)
                    .range(-50., 50.)
                    .theme(ThemePreset::Red)
                    .container(SliderContainer::Window)
                    .on_complete(|_event, slider, _window, _cx| {
                        tracing::info!(value = slider.value(), "balance set");
                    }),
                cx,
            )
        });

        let locked = cx.new(|cx| {
            Slider::new(
                SliderOptions::new()
                    .id("locked")
                    .position(40., 240.)
                    .range(-1000., 2000.)
                    .value(300.)
                    .disabled(true),
                cx,
            )
        });

        cx.observe(&volume, |_, _, cx| cx.notify()).detach();
        cx.observe(&balance, |_, _, cx| cx.notify()).detach();

        Self {
            volume,
            balance,
            locked,
        }
    }
}

impl Render for Root {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        gpui_slider::init_for_window(window, cx);

        let theme = cx.get_theme();
        let label = format!(
            "volume {}  balance {}",
            self.volume.read(cx).value(),
            self.balance.read(cx).value()
        );

        div()
            .relative()
            .size_full()
            .bg(theme.colors.color1)
            .text_color(theme.text.normal.fill)
            .text_size(theme.text.normal.size)
            .p(theme.layout.padding * 4.)
            .child(label)
            .child(self.volume.clone())
            .child(self.balance.clone())
            .child(self.locked.clone())
    }
}

fn load_theme() -> anyhow::Result<Theme> {
    let preset = std::env::var("SLIDER_THEME")
        .map(|name| ThemePreset::from_name(&name))
        .unwrap_or_default();

    let overrides = match std::env::args().nth(1) {
        Some(path) => Some(
            ThemeOverrides::from_path(&path)
                .with_context(|| format!("loading theme overrides from {path}"))?,
        ),
        None => None,
    };

    Ok(resolve_theme(preset, overrides.as_ref()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let theme = load_theme()?;
    tracing::info!(theme = %theme.name, "starting slider demo");

    Application::new()
        .with_quit_mode(gpui::QuitMode::LastWindowClosed)
        .run(move |cx: &mut App| {
            cx.set_theme(theme);
            gpui_slider::init(cx);

            let bounds = Bounds::centered(None, size(px(420.), px(360.)), cx);

            let window = cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(TitlebarOptions {
                        appears_transparent: true,
                        traffic_light_position: Some(point(px(10.), px(10.))),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |_window, cx| cx.new(Root::new),
            );

            if let Err(err) = window {
                tracing::error!(%err, "failed to open window");
                cx.quit();
                return;
            }

            cx.activate(true);
        });

    Ok(())
}
