//! Fixed art frames for the counter screen.
//!
//! Two ordered sets of six frames each, selected by index and never
//! modified: the cigarette burn-down stages and the ashtray fill levels,
//! plus the ash chunk glyphs.

/// Cigarette burn-down, stage 0 (fresh) to stage 5 (down to the filter).
/// `(▒▒▒▒)` is the filter, `█` unburnt paper, `░` ash, `▓` the ember.
pub const CIG_FRAMES: [&str; 6] = [
    "(▒▒▒▒)████████████████████▓",
    "(▒▒▒▒)████████████████░░░░▓",
    "(▒▒▒▒)████████████░░░░░░░░▓",
    "(▒▒▒▒)████████░░░░░░░░░░░░▓",
    "(▒▒▒▒)████░░░░░░░░░░░░░░░░▓",
    "(▒▒▒▒)░░░░░░░░░░░░░░░░░░░░▓",
];

/// Ashtray fill, level 0 (empty) to level 5 (about to be emptied).
/// Every frame is exactly [`ASHTRAY_HEIGHT`] lines tall.
pub const ASHTRAY_FRAMES: [&str; 6] = [
    "╭──────────────────╮\n\
     │                  │\n\
     │                  │\n\
     ╰──────────────────╯",
    "╭──────────────────╮\n\
     │                  │\n\
     │  ∙∙    ∙         │\n\
     ╰──────────────────╯",
    "╭──────────────────╮\n\
     │                  │\n\
     │  ∙∙∙  ∙∙   ∙∙∙   │\n\
     ╰──────────────────╯",
    "╭──────────────────╮\n\
     │       ∙∙    ∙    │\n\
     │ ∙∙∙∙∙∙∙∙∙∙∙∙∙∙∙  │\n\
     ╰──────────────────╯",
    "╭──────────────────╮\n\
     │  ∙∙∙∙  ∙∙∙∙∙ ∙∙  │\n\
     │ ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒ │\n\
     ╰──────────────────╯",
    "╭──────────────────╮\n\
     │ ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒ │\n\
     │ ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒ │\n\
     ╰──────────────────╯",
];

pub const ASHTRAY_HEIGHT: u16 = 4;

/// The falling chunk, small while the drop is young, full size near the end.
pub const CHUNK_SMALL: &str = "▪";
pub const CHUNK_LARGE: &str = "■";

pub fn cig_frame(stage: usize) -> &'static str {
    CIG_FRAMES[stage.min(CIG_FRAMES.len() - 1)]
}

pub fn ashtray_frame(level: usize) -> &'static str {
    ASHTRAY_FRAMES[level.min(ASHTRAY_FRAMES.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cig_frames_share_one_width() {
        let width = CIG_FRAMES[0].chars().count();
        for (stage, frame) in CIG_FRAMES.iter().enumerate() {
            assert_eq!(frame.chars().count(), width, "stage {stage}");
            assert!(!frame.contains('\n'));
        }
    }

    #[test]
    fn test_ashtray_frames_share_one_height() {
        for (level, frame) in ASHTRAY_FRAMES.iter().enumerate() {
            assert_eq!(
                frame.lines().count(),
                ASHTRAY_HEIGHT as usize,
                "level {level}"
            );
        }
    }

    #[test]
    fn test_frame_accessors_clamp() {
        assert_eq!(cig_frame(99), CIG_FRAMES[5]);
        assert_eq!(ashtray_frame(99), ASHTRAY_FRAMES[5]);
        assert_eq!(cig_frame(0), CIG_FRAMES[0]);
    }
}
