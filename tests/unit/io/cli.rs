//! Tests for command-line parsing and command execution

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use kolam::KolamError;
    use kolam::io::cli::{Cli, Command, CommandProcessor, parse_points};
    use kolam::spatial::drawing::Point;
    use serde_json::Value;
    use std::path::Path;

    fn run(arguments: &[&str]) -> kolam::Result<Value> {
        let cli = Cli::try_parse_from(arguments).expect("Failed to parse arguments");
        let report = CommandProcessor::new(cli).execute()?;
        Ok(serde_json::from_str(&report).expect("Report should be JSON"))
    }

    fn path_arg(path: &Path) -> &str {
        path.to_str().expect("Temp path should be UTF-8")
    }

    // Tests subcommand defaults
    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["kolam", "generate"]).expect("Failed to parse");
        assert!(cli.should_show_progress());
        let Command::Generate(args) = cli.command else {
            unreachable!("Expected generate");
        };
        assert_eq!(args.size, "7");
        assert_eq!(args.pattern, "basic");
        assert!(!args.no_grid && !args.axes);
        assert!(args.output.is_none());
    }

    // Tests global flags are accepted after the subcommand
    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["kolam", "animate", "--frames", "4", "--quiet", "-v"])
            .expect("Failed to parse");
        assert!(!cli.should_show_progress());
        assert!(cli.verbose);
        let Command::Animate(args) = cli.command else {
            unreachable!("Expected animate");
        };
        assert_eq!(args.frames, 4);
    }

    // Tests reconstruct requires an image argument
    #[test]
    fn test_reconstruct_requires_image() {
        assert!(Cli::try_parse_from(["kolam", "reconstruct"]).is_err());
        assert!(Cli::try_parse_from(["kolam", "reconstruct", "dots.png"]).is_ok());
    }

    // Tests coordinate pairs parse and malformed pairs are rejected
    #[test]
    fn test_parse_points() {
        let points = parse_points(" 1,2  3.5,4\n-1,0").expect("Failed to parse points");
        assert_eq!(points.first(), Some(&Point::new(1.0, 2.0)));
        assert_eq!(points.len(), 3);
        assert_eq!(points.last(), Some(&Point::new(-1.0, 0.0)));

        assert!(matches!(
            parse_points("1,2 x,3"),
            Err(KolamError::InvalidParameter { .. })
        ));
        assert!(parse_points("").map(|points| points.is_empty()).unwrap_or(false));
    }

    // Tests generate writes SVG and PNG and reports corrections
    #[test]
    fn test_generate_writes_outputs() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let svg = temp_dir.path().join("star.svg");
        let png = temp_dir.path().join("star.png");

        let report = run(&[
            "kolam",
            "generate",
            "--size",
            "40",
            "--pattern",
            "star",
            "--axes",
            "--output",
            path_arg(&svg),
            "--png",
            path_arg(&png),
        ])
        .expect("Generate should succeed");

        assert_eq!(report.get("pattern"), Some(&Value::from("star")));
        assert_eq!(report.get("grid_size"), Some(&Value::from(15)));
        assert_eq!(report.get("was_corrected"), Some(&Value::Bool(true)));
        assert!(svg.exists() && png.exists());
    }

    // Tests animate writes a GIF and one SVG per frame
    #[test]
    fn test_animate_writes_outputs() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let gif = temp_dir.path().join("lotus.gif");
        let frames = temp_dir.path().join("frames");

        let report = run(&[
            "kolam",
            "--quiet",
            "animate",
            "--size",
            "5",
            "--pattern",
            "lotus",
            "--frames",
            "3",
            "--output",
            path_arg(&gif),
            "--frames-dir",
            path_arg(&frames),
        ])
        .expect("Animate should succeed");

        assert_eq!(report.get("frames"), Some(&Value::from(3)));
        assert!(gif.exists());
        let written = std::fs::read_dir(&frames).expect("Frames dir").count();
        assert_eq!(written, 3);
    }

    // Tests zero frames is rejected before anything is written
    #[test]
    fn test_animate_zero_frames() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let gif = temp_dir.path().join("none.gif");
        let result = run(&["kolam", "animate", "--frames", "0", "-o", path_arg(&gif)]);

        assert!(matches!(result, Err(KolamError::InvalidParameter { .. })));
        assert!(!gif.exists());
    }

    // Tests analyze reports from kind tables and from coordinates
    #[test]
    fn test_analyze() {
        let by_kind = run(&["kolam", "analyze", "--pattern", "mandala"]).expect("Analyze kind");
        assert_eq!(by_kind.get("pattern_type"), Some(&Value::from("mandala")));
        assert_eq!(by_kind.get("symmetry.radial"), Some(&Value::Bool(true)));

        let by_points = run(&["kolam", "analyze", "--points", "0,0 10,0 0,10 10,10"])
            .expect("Analyze points");
        assert_eq!(by_points.get("symmetry.horizontal"), Some(&Value::Bool(true)));
        assert!(by_points.get("pattern_type").is_some());

        let by_grid = run(&["kolam", "analyze", "--size", "5"]).expect("Analyze grid");
        assert_eq!(by_grid.get("repetition.has_repetition"), Some(&Value::Bool(true)));
    }

    // Tests reconstruct analyses an image file and writes the graph drawing
    #[test]
    fn test_reconstruct() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = temp_dir.path().join("dots.png");
        let svg = temp_dir.path().join("graph.svg");
        let mut image = RgbImage::from_pixel(200, 200, Rgb([255, 255, 255]));
        for (cx, cy) in [(60i64, 60i64), (100, 60), (60, 100), (100, 100), (140, 140)] {
            for y in (cy - 6)..=(cy + 6) {
                for x in (cx - 6)..=(cx + 6) {
                    if (x - cx).pow(2) + (y - cy).pow(2) <= 36 {
                        image.put_pixel(x as u32, y as u32, Rgb([0, 0, 0]));
                    }
                }
            }
        }
        image.save(&input).expect("Failed to write input image");

        let report = run(&["kolam", "reconstruct", path_arg(&input), "--svg", path_arg(&svg)])
            .expect("Reconstruct should succeed");

        assert_eq!(report.get("status"), Some(&Value::from("success")));
        assert_eq!(report.get("inference.node_count"), Some(&Value::from(5)));
        assert!(svg.exists());
    }

    // Tests a missing image file is a file-system error
    #[test]
    fn test_reconstruct_missing_file() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let missing = temp_dir.path().join("missing.png");
        let result = run(&["kolam", "reconstruct", path_arg(&missing)]);

        assert!(matches!(result, Err(KolamError::FileSystem { .. })));
    }
}
