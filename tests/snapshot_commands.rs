use std::path::PathBuf;

use ffshrink::engine::{Codec, EncodeParams, SpeedPreset, build_job, format_cmd};
use insta::assert_snapshot;

fn cmd_for(input: &str, codec: Codec, quality: u32, preset: SpeedPreset) -> String {
    let request = EncodeParams {
        input_path: Some(PathBuf::from(input)),
        codec,
        quality,
        preset,
    }
    .validate()
    .expect("valid request");

    format_cmd(&build_job(&request))
}

#[test]
fn snapshot_h264_defaults() {
    assert_snapshot!(
        cmd_for("movie.mp4", Codec::H264, 23, SpeedPreset::Medium),
        @"ffmpeg -y -i movie.mp4 -c:v libx264 -crf 23 -preset medium -c:a copy movie_compressed.mp4"
    );
}

#[test]
fn snapshot_h265_slow() {
    assert_snapshot!(
        cmd_for("/videos/clip.mkv", Codec::H265, 28, SpeedPreset::Slow),
        @"ffmpeg -y -i /videos/clip.mkv -c:v libx265 -crf 28 -preset slow -c:a copy /videos/clip_compressed.mkv"
    );
}

#[test]
fn paths_with_spaces_are_quoted() {
    let cmd = cmd_for("home movies/summer trip.mp4", Codec::H264, 23, SpeedPreset::Fast);

    // Quoting style is shlex's concern; just make sure the spaced paths
    // survive as single shell words
    let words = shlex_split(&cmd);
    assert!(words.contains(&"home movies/summer trip.mp4".to_string()));
    assert!(words.contains(&"home movies/summer trip_compressed.mp4".to_string()));
}

fn shlex_split(cmd: &str) -> Vec<String> {
    shlex::split(cmd).expect("preview should be valid shell")
}
