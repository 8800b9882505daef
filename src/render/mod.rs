//! Layered frame description
//!
//! The sim never draws. Once per rendered frame the frontend asks for the
//! draw list, already sorted by layer, and maps each command onto whatever
//! sprite/text primitives its media library provides.

use glam::Vec2;

use crate::sim::GameState;

/// Compositing order, ascending
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Background = 0,
    Stars = 1,
    Player = 2,
    Ui = 3,
}

/// Images the frontend is expected to have loaded at startup (a failed
/// load there is fatal before the loop starts)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageId {
    Background,
    Vehicle,
    /// Animated tile set; commands carry the frame index
    Star,
}

/// One draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Sprite {
        image: ImageId,
        /// Animation frame for tiled images, 0 for static ones
        frame: usize,
        /// Sprite center in screen coordinates (Background draws from its
        /// top-left corner instead)
        pos: Vec2,
        /// Rotation in radians; presentation units are the frontend's call
        angle: f32,
        layer: Layer,
    },
    Text {
        text: String,
        pos: Vec2,
        layer: Layer,
        /// 0xAARRGGBB
        color: u32,
    },
}

impl DrawCmd {
    pub fn layer(&self) -> Layer {
        match self {
            DrawCmd::Sprite { layer, .. } => *layer,
            DrawCmd::Text { layer, .. } => *layer,
        }
    }
}

/// Frames in the star tile set
pub const STAR_FRAMES: usize = 10;
/// Star animation advances every 100 ms of sim time (36 substeps at 360 Hz)
pub const TICKS_PER_STAR_FRAME: u64 = 36;

/// Animation frame for the star tile set at the given sim tick
#[inline]
pub fn star_frame(time_ticks: u64) -> usize {
    (time_ticks / TICKS_PER_STAR_FRAME) as usize % STAR_FRAMES
}

/// Score HUD color (opaque yellow)
pub const SCORE_COLOR: u32 = 0xffff_ff00;

/// Build the draw list for the current state, sorted ascending by layer
pub fn build_frame(state: &GameState) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity(state.stars.len() + 3);

    cmds.push(DrawCmd::Sprite {
        image: ImageId::Background,
        frame: 0,
        pos: Vec2::ZERO,
        angle: 0.0,
        layer: Layer::Background,
    });

    for star in &state.stars {
        if let Some(body) = state.space.body(star.body) {
            cmds.push(DrawCmd::Sprite {
                image: ImageId::Star,
                frame: star_frame(state.time_ticks),
                pos: body.position,
                angle: 0.0,
                layer: Layer::Stars,
            });
        }
    }

    if let Some(body) = state.space.body(state.player.body) {
        cmds.push(DrawCmd::Sprite {
            image: ImageId::Vehicle,
            frame: 0,
            pos: body.position,
            angle: body.angle,
            layer: Layer::Player,
        });
    }

    cmds.push(DrawCmd::Text {
        text: format!("Score: {}", state.score),
        pos: Vec2::new(10.0, 10.0),
        layer: Layer::Ui,
        color: SCORE_COLOR,
    });

    // Construction order already ascends, but the sorted contract is what
    // frontends composite by
    cmds.sort_by_key(|cmd| cmd.layer());
    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Star;

    #[test]
    fn test_frame_layers_ascend() {
        let mut state = GameState::new(11);
        for i in 0..3 {
            let star = Star::spawn(&mut state.space, Vec2::new(50.0 * i as f32, 40.0));
            state.stars.push(star);
        }

        let cmds = build_frame(&state);
        assert_eq!(cmds.len(), 3 + 3);
        assert!(cmds.windows(2).all(|w| w[0].layer() <= w[1].layer()));
        assert_eq!(cmds[0].layer(), Layer::Background);
        assert_eq!(cmds.last().expect("nonempty").layer(), Layer::Ui);
    }

    #[test]
    fn test_score_text_reflects_state() {
        let mut state = GameState::new(11);
        state.score = 120;

        let cmds = build_frame(&state);
        let Some(DrawCmd::Text { text, pos, color, .. }) = cmds.last() else {
            panic!("last command must be the HUD text");
        };
        assert_eq!(text, "Score: 120");
        assert_eq!(*pos, Vec2::new(10.0, 10.0));
        assert_eq!(*color, SCORE_COLOR);
    }

    #[test]
    fn test_vehicle_sprite_tracks_body() {
        let mut state = GameState::new(11);
        state.player.warp(&mut state.space, Vec2::new(123.0, 45.0));

        let cmds = build_frame(&state);
        let vehicle = cmds.iter().find(|c| {
            matches!(
                c,
                DrawCmd::Sprite {
                    image: ImageId::Vehicle,
                    ..
                }
            )
        });
        let Some(DrawCmd::Sprite { pos, angle, .. }) = vehicle else {
            panic!("vehicle sprite missing");
        };
        assert_eq!(*pos, Vec2::new(123.0, 45.0));
        assert!((angle - crate::sim::state::SPAWN_ANGLE).abs() < 1e-6);
    }

    #[test]
    fn test_star_animation_cycles() {
        assert_eq!(star_frame(0), 0);
        assert_eq!(star_frame(TICKS_PER_STAR_FRAME), 1);
        assert_eq!(star_frame(TICKS_PER_STAR_FRAME * STAR_FRAMES as u64), 0);
    }
}
