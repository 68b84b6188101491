//! Tests for GIF and per-frame SVG export

#[cfg(test)]
mod tests {
    use kolam::KolamError;
    use kolam::algorithm::animation::frames;
    use kolam::algorithm::kind::PatternKind;
    use kolam::io::visualization::{export_frame_svgs, export_gif, frame_path, gif_frames};
    use kolam::spatial::grid::GridSpec;
    use std::num::NonZeroUsize;

    fn three() -> NonZeroUsize {
        NonZeroUsize::new(3).unwrap_or(NonZeroUsize::MIN)
    }

    // Tests the final frame is repeated with a longer delay
    #[test]
    fn test_final_frame_hold() {
        let all = frames(GridSpec::new(3), PatternKind::Star, three());
        let encoded = gif_frames(&all, 100, 10).expect("Failed to build frames");

        assert_eq!(encoded.len(), 4);
        let delays: Vec<(u32, u32)> = encoded
            .iter()
            .map(|frame| frame.delay().numer_denom_ms())
            .collect();
        assert_eq!(delays.first(), Some(&(100, 1)));
        assert_eq!(delays.last(), Some(&(1000, 1)));
    }

    // Tests no frames is an error
    #[test]
    fn test_no_frames() {
        assert!(matches!(
            gif_frames(&[], 100, 10),
            Err(KolamError::EmptyDrawing { .. })
        ));
    }

    // Tests the GIF is written and decodes
    #[test]
    fn test_export_gif() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("anim").join("sunburst.gif");
        let all = frames(GridSpec::new(3), PatternKind::Sunburst, three());

        export_gif(&all, &path, 100, 10).expect("Failed to export gif");
        let bytes = std::fs::read(&path).expect("Failed to read gif");
        assert!(bytes.starts_with(b"GIF8"));
    }

    // Tests every frame gets its own numbered SVG
    #[test]
    fn test_frame_svgs() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let directory = temp_dir.path().join("frames");
        let all = frames(GridSpec::new(5), PatternKind::Lotus, three());

        let paths = export_frame_svgs(&all, &directory).expect("Failed to export frames");
        assert_eq!(paths.len(), 3);
        assert_eq!(paths.last(), Some(&frame_path(&directory, 2)));
        assert!(paths.iter().all(|path| path.exists()));
        assert!(frame_path(&directory, 7).ends_with("frame_0007.svg"));
    }
}
