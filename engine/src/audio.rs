use std::{io::Read, path::Path};

use log::{debug, warn};
use rodio::{buffer::SamplesBuffer, OutputStream, OutputStreamHandle, Sink};

use crate::error::{EngineError, Result};

/// Handle to the default audio output device. Dropping it stops all playback.
pub struct Audio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl Audio {
    pub fn new() -> Result<Self> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }

    /// Starts `sound` on its own detached sink so overlapping plays mix.
    pub fn play(&self, sound: &Sound) {
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                sink.append(sound.source());
                sink.detach();
            }
            Err(err) => warn!("failed to play sound: {err}"),
        }
    }
}

/// A fully decoded WAV clip kept in memory.
#[derive(Debug, Clone)]
pub struct Sound {
    channels: u16,
    sample_rate: u32,
    samples: Vec<f32>,
}

impl Sound {
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let sound = Self::from_reader(std::io::BufReader::new(file)).map_err(|source| {
            EngineError::Sound {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!(
            "loaded {} ({} ch, {} Hz, {} samples)",
            path.display(),
            sound.channels,
            sound.sample_rate,
            sound.samples.len()
        );
        Ok(sound)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, hound::Error> {
        let reader = hound::WavReader::new(reader)?;
        let spec = reader.spec();

        let samples = match spec.sample_format {
            hound::SampleFormat::Float => reader.into_samples::<f32>().collect::<Result<Vec<_>, _>>()?,
            hound::SampleFormat::Int => {
                let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .into_samples::<i32>()
                    .map(|sample| sample.map(|s| s as f32 / scale))
                    .collect::<Result<Vec<_>, _>>()?
            }
        };

        Ok(Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            samples,
        })
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    // Each play owns its own copy of the clip.
    fn source(&self) -> SamplesBuffer<f32> {
        SamplesBuffer::new(self.channels, self.sample_rate, self.samples.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn wav_bytes(spec: hound::WavSpec, write: impl FnOnce(&mut hound::WavWriter<&mut Cursor<Vec<u8>>>)) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            write(&mut writer);
            writer.finalize().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn decodes_16_bit_pcm_to_unit_range() {
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 44_100,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let bytes = wav_bytes(spec, |w| {
            for s in [0i16, i16::MAX, i16::MIN, 16_384] {
                w.write_sample(s).unwrap();
            }
        });

        let sound = Sound::from_reader(Cursor::new(bytes)).unwrap();
        assert_eq!(sound.channels(), 2);
        assert_eq!(sound.sample_rate(), 44_100);
        assert_eq!(sound.samples().len(), 4);
        assert_eq!(sound.samples()[0], 0.0);
        assert!((sound.samples()[1] - 1.0).abs() < 1e-4);
        assert_eq!(sound.samples()[2], -1.0);
        assert_eq!(sound.samples()[3], 0.5);
    }

    #[test]
    fn decodes_float_pcm_unchanged() {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 22_050,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let bytes = wav_bytes(spec, |w| {
            for s in [0.25f32, -0.75] {
                w.write_sample(s).unwrap();
            }
        });

        let sound = Sound::from_reader(Cursor::new(bytes)).unwrap();
        assert_eq!(sound.samples(), &[0.25, -0.75]);
    }

    #[test]
    fn rejects_non_wav_input() {
        assert!(Sound::from_reader(Cursor::new(b"RIFFnope".to_vec())).is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Sound::load(Path::new("does/not/exist.wav")).unwrap_err();
        assert!(matches!(err, EngineError::Io { .. }));
    }
}
