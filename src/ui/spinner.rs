/// Processing indicator shown in place of the result image
use iced::widget::canvas::{self, path, LineCap, Path, Stroke};
use iced::{Radians, Rectangle};
use std::f32::consts::{PI, TAU};

use crate::Message;

/// Angle advanced per animation tick (radians)
pub const STEP: f32 = 0.15;

/// A rotating arc. `phase` is the start angle of the arc.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spinner {
    pub phase: f32,
}

impl Spinner {
    /// Phase after one animation tick, kept within one turn
    pub fn advance(phase: f32) -> f32 {
        (phase + STEP) % TAU
    }
}

impl canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let palette = theme.extended_palette();

        let center = frame.center();
        let radius = bounds.width.min(bounds.height) * 0.15;

        let track = Path::circle(center, radius);
        frame.stroke(
            &track,
            Stroke::default()
                .with_color(palette.background.strong.color)
                .with_width(4.0),
        );

        let mut builder = path::Builder::new();
        builder.arc(path::Arc {
            center,
            radius,
            start_angle: Radians(self.phase),
            end_angle: Radians(self.phase + PI * 1.5),
        });
        frame.stroke(
            &builder.build(),
            Stroke::default()
                .with_color(palette.primary.strong.color)
                .with_width(4.0)
                .with_line_cap(LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}
