use crate::audio::{AudioBackend, AudioRenderer};
use crate::error::HearnetError;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, SizedSample, Stream};

/// Scratch buffer frames reserved up front so the callback does not allocate.
const INITIAL_FRAMES: usize = 8192;

pub struct CpalBackend<R: AudioRenderer> {
    name: String,
    stream: Option<Stream>,
    renderer: Option<R>,
}

impl<R: AudioRenderer> CpalBackend<R> {
    /// `name` labels this output in the log, e.g. "hearnet eth0".
    pub fn new(name: impl Into<String>, renderer: R) -> Self {
        Self {
            name: name.into(),
            stream: None,
            renderer: Some(renderer),
        }
    }

    fn select_output_device(&self, host: &cpal::Host) -> Result<cpal::Device, HearnetError> {
        host.default_output_device()
            .ok_or(HearnetError::NoOutputDevice)
    }

    fn build_stream(&mut self) -> Result<Stream, HearnetError> {
        let host = cpal::default_host();
        let device = self.select_output_device(&host)?;
        log::info!(
            "{}: selected device {}",
            self.name,
            device.name().unwrap_or_default()
        );

        let supported_config = device.default_output_config()?;
        let stream_config: cpal::StreamConfig = supported_config.clone().into();
        log::info!("engine sample rate: {}", stream_config.sample_rate.0);

        let mut renderer = self
            .renderer
            .take()
            .ok_or(HearnetError::StreamAlreadyStarted)?;
        renderer.set_sample_rate(stream_config.sample_rate.0);

        match supported_config.sample_format() {
            SampleFormat::F32 => Self::build_typed::<f32>(&device, &stream_config, renderer),
            SampleFormat::I16 => Self::build_typed::<i16>(&device, &stream_config, renderer),
            SampleFormat::U16 => Self::build_typed::<u16>(&device, &stream_config, renderer),
            other => Err(HearnetError::UnsupportedSampleFormat(other)),
        }
    }

    fn build_typed<T>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        mut renderer: R,
    ) -> Result<Stream, HearnetError>
    where
        T: SizedSample + FromSample<f32>,
    {
        let channels = config.channels as usize;
        let mut buffer = vec![0.0f32; INITIAL_FRAMES];

        let stream = device.build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                let frames = data.len() / channels;
                if buffer.len() < frames {
                    buffer.resize(frames, 0.0);
                }
                let mono = &mut buffer[..frames];
                renderer.render(mono);

                for (frame, sample) in data.chunks_mut(channels).zip(mono.iter()) {
                    let value = T::from_sample(*sample);
                    frame.iter_mut().for_each(|out| *out = value);
                }
            },
            |err| {
                // Losing the device is fatal; there is no reconnect.
                log::error!("Audio stream error: {}", err);
                std::process::exit(1);
            },
            None,
        )?;
        Ok(stream)
    }
}

impl<R: AudioRenderer> AudioBackend for CpalBackend<R> {
    fn start(&mut self) -> Result<(), HearnetError> {
        let stream = self.build_stream()?;
        stream.play()?;
        self.stream = Some(stream);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), HearnetError> {
        if let Some(stream) = &self.stream {
            stream.pause()?;
        }
        Ok(())
    }
}
