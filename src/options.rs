//! Transform resolution.
//!
//! Maps the symbolic option names accepted in a manifest group (`rotate90`,
//! `flipH`, `recursive`, ...) to a [`TransformSet`] applied to every page
//! produced from that group's files.

use crate::error::{BindError, Result};

/// Page rotation in degrees, counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Rotate 90 degrees counter-clockwise.
    Ccw90,
    /// Rotate 180 degrees.
    Ccw180,
    /// Rotate 270 degrees counter-clockwise.
    Ccw270,
}

impl Rotation {
    /// Get rotation as counter-clockwise degrees.
    pub fn as_degrees(&self) -> i64 {
        match self {
            Self::Ccw90 => 90,
            Self::Ccw180 => 180,
            Self::Ccw270 => 270,
        }
    }
}

/// The set of geometric operations to apply to every page originating from
/// one work item.
///
/// Rotation and flips are independent and may combine. `recursive` affects
/// path expansion only, never page content; it is silently ignored for
/// non-directory paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformSet {
    /// Optional rotation. When a group lists several rotation options the
    /// last one wins.
    pub rotation: Option<Rotation>,
    /// Mirror pages about their vertical axis.
    pub flip_h: bool,
    /// Mirror pages about their horizontal axis.
    pub flip_v: bool,
    /// Expand directories recursively.
    pub recursive: bool,
}

impl TransformSet {
    /// Resolve a list of option names into a transform set.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::UnrecognizedOption`] naming the first option
    /// string that is not recognized.
    pub fn resolve(options: &[String]) -> Result<Self> {
        let mut set = Self::default();

        for name in options {
            match name.as_str() {
                "rotate90" => set.rotation = Some(Rotation::Ccw90),
                "rotate180" => set.rotation = Some(Rotation::Ccw180),
                "rotate270" => set.rotation = Some(Rotation::Ccw270),
                "flipH" => set.flip_h = true,
                "flipV" => set.flip_v = true,
                "recursive" => set.recursive = true,
                other => return Err(BindError::unrecognized_option(other)),
            }
        }

        Ok(set)
    }

    /// Check whether this set changes page content at all.
    pub fn is_identity(&self) -> bool {
        self.rotation.is_none() && !self.flip_h && !self.flip_v
    }
}
