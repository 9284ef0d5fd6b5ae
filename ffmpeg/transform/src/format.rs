/*!
    Pixel format negotiation against an encoder.
*/

use ffmpeg_next::{Codec, format::Pixel};

/// Formats tried in order before falling back to the encoder's first choice.
const PREFERRED_FORMATS: [Pixel; 2] = [Pixel::RGBA, Pixel::RGB24];

/**
    Pick the output pixel format from a list of supported formats.

    RGBA wins when available so transparency survives, then packed RGB,
    then whatever the encoder lists first. An empty list means the encoder
    did not advertise anything, in which case RGBA is assumed.
*/
pub fn negotiate_pixel_format(supported: &[Pixel]) -> Pixel {
    PREFERRED_FORMATS
        .into_iter()
        .find(|format| supported.contains(format))
        .or_else(|| supported.first().copied())
        .unwrap_or(Pixel::RGBA)
}

/**
    Pick the output pixel format for `codec` from the formats it advertises.
*/
pub fn encoder_pixel_format(codec: Codec) -> Pixel {
    let supported: Vec<Pixel> = codec
        .video()
        .ok()
        .and_then(|video| video.formats().map(|it| it.collect()))
        .unwrap_or_default();

    let format = negotiate_pixel_format(&supported);
    log::debug!(
        "negotiated {format:?} for {} from {} advertised format(s)",
        codec.name(),
        supported.len()
    );
    format
}
