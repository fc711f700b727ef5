//! Canvas that records every call, for tests

use glam::DVec2;

use super::canvas::Canvas;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Color([u8; 4]),
    Line(DVec2, DVec2),
    Clear,
    Present,
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<Op>,
}

impl RecordingCanvas {
    pub fn lines(&self) -> Vec<(DVec2, DVec2)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line(a, b) => Some((*a, *b)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: &Op) -> usize {
        self.ops.iter().filter(|op| *op == wanted).count()
    }
}

impl Canvas for RecordingCanvas {
    fn set_draw_color(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.ops.push(Op::Color([r, g, b, a]));
    }

    fn draw_line(&mut self, from: DVec2, to: DVec2) {
        self.ops.push(Op::Line(from, to));
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn present(&mut self) {
        self.ops.push(Op::Present);
    }
}
