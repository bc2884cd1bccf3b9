//! WAV file sink backed by `hound`.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::{Path, PathBuf};

use log::info;

use super::{PcmFormat, PcmSink};
use crate::config::MAX_LENGTH;
use crate::{Error, Result};

/// Writes PCM samples as a WAV stream.
///
/// Any `Write + Seek` destination works; `WavSink::create` opens a buffered
/// file. The header is finalised when `write_pcm` returns, so one sink holds
/// exactly one render.
pub struct WavSink<W: Write + Seek> {
    writer: Option<W>,
    path: Option<PathBuf>,
}

impl WavSink<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` when the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(file)),
            path: Some(path.to_path_buf()),
        })
    }
}

impl<W: Write + Seek> WavSink<W> {
    /// Wraps an already open destination.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Some(writer),
            path: None,
        }
    }
}

impl<W: Write + Seek> PcmSink for WavSink<W> {
    fn write_pcm(&mut self, format: PcmFormat, samples: &[i16]) -> Result<()> {
        if format.bits_per_sample != 16 {
            return Err(Error::invalid(
                "bits_per_sample",
                format!("only 16-bit output is supported, got {}", format.bits_per_sample),
            ));
        }
        if samples.len() > MAX_LENGTH {
            return Err(Error::invalid(
                "samples",
                format!("{} samples do not fit in a WAV file", samples.len()),
            ));
        }
        let writer = self
            .writer
            .take()
            .ok_or_else(|| Error::invalid("sink", "WAV sink has already been written"))?;

        let spec = hound::WavSpec {
            channels: format.channels,
            sample_rate: format.sample_rate,
            bits_per_sample: format.bits_per_sample,
            sample_format: hound::SampleFormat::Int,
        };
        let mut wav = hound::WavWriter::new(writer, spec)?;
        {
            let mut samples_writer = wav.get_i16_writer(samples.len() as u32);
            for &sample in samples {
                samples_writer.write_sample(sample);
            }
            samples_writer.flush()?;
        }
        wav.finalize()?;

        match &self.path {
            Some(path) => info!(
                "wrote {} samples at {} Hz to {}",
                samples.len(),
                format.sample_rate,
                path.display()
            ),
            None => info!(
                "wrote {} samples at {} Hz",
                samples.len(),
                format.sample_rate
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_round_trip_in_memory() {
        let mut buffer = Cursor::new(Vec::new());
        let samples = [0i16, 1000, -1000, i16::MAX, -i16::MAX];
        {
            let mut sink = WavSink::new(&mut buffer);
            sink.write_pcm(PcmFormat::mono16(22050), &samples).unwrap();
        }

        buffer.set_position(0);
        let mut reader = hound::WavReader::new(buffer).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 22050);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, hound::SampleFormat::Int);

        let read: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(read, samples);
    }

    #[test]
    fn test_second_write_rejected() {
        let mut buffer = Cursor::new(Vec::new());
        let mut sink = WavSink::new(&mut buffer);
        sink.write_pcm(PcmFormat::mono16(44100), &[1, 2]).unwrap();
        assert!(sink.write_pcm(PcmFormat::mono16(44100), &[3]).is_err());
    }

    #[test]
    fn test_non_16_bit_rejected() {
        let mut sink = WavSink::new(Cursor::new(Vec::new()));
        let format = PcmFormat {
            bits_per_sample: 24,
            ..PcmFormat::mono16(44100)
        };
        assert!(sink.write_pcm(format, &[0]).is_err());
    }

    #[test]
    fn test_create_in_missing_directory_fails() {
        let path = std::env::temp_dir()
            .join("bass-missing-dir-for-test")
            .join("nested")
            .join("out.wav");
        let err = WavSink::create(&path).err().unwrap();
        assert!(matches!(err, Error::Io(_)));
    }
}
