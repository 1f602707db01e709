use gpui::{
    AnyView, App, AppContext, Context, IntoElement, ParentElement, Render, SharedString, Styled,
    Window, div, prelude::FluentBuilder, px,
};
use gpui_squircle::{SquircleStyled, squircle};

use crate::{theme::Theme, utils::RgbaExt};

/// A small text label shown while hovering a component.
///
/// Styled from the theme it was created with rather than the global one, so a
/// slider with its own theme gets a matching tooltip.
pub struct Tooltip {
    text: SharedString,
    theme: Theme,
}

impl Tooltip {
    pub fn new(text: impl Into<SharedString>, theme: Theme) -> Self {
        Self {
            text: text.into(),
            theme,
        }
    }

    pub fn text(&self) -> &SharedString {
        &self.text
    }

    /// Builds the tooltip view for gpui's tooltip hook.
    pub fn build(text: SharedString, theme: Theme, cx: &mut App) -> AnyView {
        cx.new(|_cx| Self::new(text, theme)).into()
    }
}

impl Render for Tooltip {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let text_style = &self.theme.text.small;
        let colors = &self.theme.colors;
        let padding = self.theme.layout.padding / 2.;

        div()
            .relative()
            .px(self.theme.layout.padding)
            .py(padding)
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(self.theme.layout.radius)
                    .bg(colors.fill.alpha(0.95))
                    .border(px(1.))
                    .border_inside()
                    .border_color(colors.stroke.fade(0.25)),
            )
            .child(
                div()
                    .relative()
                    .text_size(text_style.size)
                    .font_weight(text_style.font_weight())
                    .when_some(text_style.family.first().cloned(), |this, family| {
                        this.font_family(family)
                    })
                    .text_color(text_style.fill)
                    .child(self.text.clone()),
            )
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_tooltip_keeps_text_and_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let view = cx.new(|_cx| Tooltip::new("Volume", Theme::red()));
            let tooltip = view.read(cx);

            assert_eq!(tooltip.text(), &SharedString::from("Volume"));
            assert_eq!(tooltip.theme, Theme::red());
        });
    }

    #[gpui::test]
    fn test_tooltip_builds_any_view(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let view = Tooltip::build("Volume".into(), Theme::dark(), cx);
            assert!(view.downcast::<Tooltip>().is_ok());
        });
    }
}
