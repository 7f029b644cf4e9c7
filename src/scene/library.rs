//! Built-in scenes
//!
//! Each function writes its steps for a strip of `len` pixels into a
//! builder. Longer choreographies are expected to live with the
//! application, built the same way.

use super::{SceneBuilder, Step};
use crate::color::{BLACK, GREEN, WHITE};
use crate::error::Result;

/// Step capacity large enough for every built-in scene on a 120-pixel strip.
pub const LIBRARY_CAPACITY: usize = 320;

/// White bars: every pixel whose index has bit 2 set, lit for 16 seconds
pub fn white_bars<const CAP: usize>(len: usize) -> Result<SceneBuilder<CAP>> {
    let mut scene = SceneBuilder::new("white_bars");
    for index in (0..len).filter(|index| index & 4 != 0) {
        scene.set_color(index, WHITE)?;
    }
    scene
        .push(Step::UpdateAllGlobal(0.5))?
        .wait_ms(16_000)?
        .push(Step::Clear)?;
    Ok(scene)
}

/// Test pattern for checking a freshly wired strip
///
/// White ends fading toward the center over the outer thirds, a dim green
/// center third with every odd pixel off. Shown for 50 seconds.
#[allow(clippy::cast_precision_loss)]
pub fn test_pattern<const CAP: usize>(len: usize) -> Result<SceneBuilder<CAP>> {
    let mut scene = SceneBuilder::new("test_pattern");
    let third = len / 3;

    for offset in 0..third {
        let fade = 0.6 / (offset + 1) as f32;
        scene
            .set_color(offset, WHITE)?
            .set_brightness(offset, fade)?;
        let mirrored = len - offset - 1;
        scene
            .set_color(mirrored, WHITE)?
            .set_brightness(mirrored, fade)?;
    }

    for offset in 0..third {
        let index = third + offset;
        let color = if offset & 1 == 1 { BLACK } else { GREEN };
        scene.set_color(index, color)?.set_brightness(index, 0.01)?;
    }

    scene
        .push(Step::UpdateAllWeighted)?
        .wait_ms(50_000)?
        .push(Step::Clear)?;
    Ok(scene)
}
