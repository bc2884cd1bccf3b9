#![cfg(feature = "wav")]

use std::time::Duration;

use bass::{BassPatch, BassPipeline, Error, SynthParams, WavSink};

#[test]
fn test_render_to_wav_file() {
    let path = std::env::temp_dir().join(format!("bass-test-{}.wav", std::process::id()));

    let params = SynthParams::new(22050, Duration::from_millis(500), 55.0).unwrap();
    let pipeline = BassPipeline::new(params, BassPatch::default()).unwrap();
    let expected = pipeline.render_pcm();

    let mut sink = WavSink::create(&path).unwrap();
    pipeline.render_to(&mut sink).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 22050);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(reader.duration(), 11025);

    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(samples, expected);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_unwritable_path_is_io_error() {
    let path = std::env::temp_dir()
        .join("bass-no-such-directory")
        .join("out.wav");
    match WavSink::create(&path) {
        Err(Error::Io(_)) => {}
        Err(other) => panic!("expected I/O error, got {other}"),
        Ok(_) => panic!("created a file in a missing directory"),
    }
}
