use axum::{
    Json,
    body::Bytes,
    extract::{Multipart, State, multipart::MultipartRejection, rejection::BytesRejection},
    response::{IntoResponse, Response},
};
use image::ImageFormat;
use serde::Serialize;
use std::{io::Cursor, sync::Arc};

use crate::{
    error::RelayError,
    messages::{MarketingSuggestions, ProductContent, SuggestionsRequest},
    model::{CopyInput, CopyModel, CopyRequest},
    prompts::{PRODUCT_PROMPT, SUGGESTIONS_PROMPT},
    sanitize::parse_generated,
};

const IMAGE_FIELD: &str = "image";

pub async fn index() -> &'static str {
    "Welcome to craftcopy!"
}

/// `POST /generate`: listing copy from an uploaded product photo.
pub async fn generate_product<M: CopyModel>(
    State(model): State<Arc<M>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let result = async {
        let upload = read_image_field(multipart).await?;
        let image = reencode_png(&upload)?;
        relay::<M, ProductContent>(&model, PRODUCT_PROMPT, image).await
    }
    .await;

    respond("/generate", result)
}

/// `POST /generate-suggestions`: three marketing ideas from a product description.
pub async fn generate_suggestions<M: CopyModel>(
    State(model): State<Arc<M>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let result = async {
        let description = read_description(&body?)?;
        relay::<M, MarketingSuggestions>(&model, SUGGESTIONS_PROMPT, CopyInput::Text(description))
            .await
    }
    .await;

    respond("/generate-suggestions", result)
}

async fn relay<M: CopyModel, T: serde::de::DeserializeOwned>(
    model: &M,
    prompt: &'static str,
    input: CopyInput,
) -> Result<T, RelayError> {
    let text = model
        .generate(CopyRequest { prompt, input })
        .await
        .map_err(|e| RelayError::Upstream(Box::new(e)))?;

    parse_generated(&text)
}

fn respond<T: Serialize>(endpoint: &str, result: Result<T, RelayError>) -> Response {
    match result {
        Ok(content) => Json(content).into_response(),
        Err(err) => {
            if !err.is_client_error() {
                log::error!("{endpoint}: {err}");
            }
            err.into_response()
        }
    }
}

/// Returns the bytes of the first `image` file field of the form.
async fn read_image_field(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Bytes, RelayError> {
    // not a multipart request at all
    let Ok(mut multipart) = multipart else {
        return Err(RelayError::MissingImage);
    };

    while let Some(field) = multipart.next_field().await? {
        // plain text fields are not uploads
        if field.name() == Some(IMAGE_FIELD) && field.file_name().is_some() {
            return Ok(field.bytes().await?);
        }
    }

    Err(RelayError::MissingImage)
}

/// Decodes the upload into a bitmap and re-encodes it as PNG for the model.
fn reencode_png(bytes: &[u8]) -> Result<CopyInput, RelayError> {
    let image = image::load_from_memory(bytes)?;

    let mut data = Vec::new();
    image.write_to(&mut Cursor::new(&mut data), ImageFormat::Png)?;

    Ok(CopyInput::Image {
        mime_type: ImageFormat::Png.to_mime_type().to_string(),
        data,
    })
}

fn read_description(body: &[u8]) -> Result<String, RelayError> {
    serde_json::from_slice::<SuggestionsRequest>(body)
        .map(|request| request.description)
        .map_err(|_| RelayError::MissingDescription)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_is_required() {
        assert!(matches!(read_description(b""), Err(RelayError::MissingDescription)));
        assert!(matches!(read_description(b"{}"), Err(RelayError::MissingDescription)));
        assert!(matches!(read_description(b"[1]"), Err(RelayError::MissingDescription)));
        assert!(matches!(
            read_description(br#"{"description": 42}"#),
            Err(RelayError::MissingDescription)
        ));
        assert_eq!(
            read_description(br#"{"description": "handwoven scarf"}"#).unwrap(),
            "handwoven scarf"
        );
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = reencode_png(b"definitely not an image").unwrap_err();
        assert!(matches!(err, RelayError::ImageDecode(_)));
    }

    #[test]
    fn images_are_sent_as_png() {
        let mut jpeg = Vec::new();
        image::RgbImage::from_pixel(4, 4, image::Rgb([200, 120, 40]))
            .write_to(&mut Cursor::new(&mut jpeg), ImageFormat::Jpeg)
            .unwrap();

        let CopyInput::Image { mime_type, data } = reencode_png(&jpeg).unwrap() else {
            panic!("expected an image input");
        };
        assert_eq!(mime_type, "image/png");
        assert_eq!(image::guess_format(&data).unwrap(), ImageFormat::Png);
    }
}
