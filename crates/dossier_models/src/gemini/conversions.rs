//! Type conversions between Dossier requests and the Gemini wire format.

use crate::gemini::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, InlineData, Part,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use dossier_core::{GenerateRequest, Input, MediaSource};
use dossier_error::{GeminiError, GeminiErrorKind};

/// Converts a Dossier GenerateRequest to the Gemini wire format.
pub fn to_wire_request(req: &GenerateRequest) -> GenerateContentRequest {
    let parts = req.inputs.iter().map(to_wire_part).collect();

    let generation_config = GenerationConfig {
        temperature: req.sampling.temperature,
        top_p: req.sampling.top_p,
        response_mime_type: req
            .output_schema
            .as_ref()
            .map(|_| "application/json".to_string()),
        response_schema: req.output_schema.clone(),
    };

    GenerateContentRequest {
        contents: vec![Content { parts }],
        generation_config: Some(generation_config),
    }
}

fn to_wire_part(input: &Input) -> Part {
    match input {
        Input::Text(text) => Part::Text(text.clone()),
        Input::Image { mime, source } => Part::InlineData(InlineData {
            mime_type: mime.clone().unwrap_or_else(|| "image/png".to_string()),
            data: encode_source(source),
        }),
        Input::Document { mime, source, .. } => Part::InlineData(InlineData {
            mime_type: mime
                .clone()
                .unwrap_or_else(|| "application/octet-stream".to_string()),
            data: encode_source(source),
        }),
    }
}

fn encode_source(source: &MediaSource) -> String {
    match source {
        MediaSource::Base64(data) => data.clone(),
        MediaSource::Binary(bytes) => STANDARD.encode(bytes),
    }
}

/// Extracts the generated text from a Gemini response.
///
/// # Errors
///
/// Returns [`GeminiErrorKind::EmptyCandidates`] when no candidate carries
/// any text.
pub fn text_from_response(response: &GenerateContentResponse) -> Result<String, GeminiError> {
    let text: String = response
        .candidates
        .iter()
        .filter_map(|candidate| candidate.content.as_ref())
        .flat_map(|content| content.parts.iter())
        .filter_map(|part| match part {
            Part::Text(text) => Some(text.as_str()),
            _ => None,
        })
        .collect();

    if text.trim().is_empty() {
        return Err(GeminiError::new(GeminiErrorKind::EmptyCandidates));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_core::SamplingOptions;

    #[test]
    fn test_text_request_wire_shape() {
        let request = GenerateRequest::text("hello").with_sampling(SamplingOptions {
            temperature: 0.3,
            top_p: 0.95,
        });

        let wire = to_wire_request(&request);
        let json = serde_json::to_value(&wire).unwrap();

        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");

        // f32 values round-trip through JSON with f64 widening noise.
        let temperature = json["generationConfig"]["temperature"].as_f64().unwrap();
        let top_p = json["generationConfig"]["topP"].as_f64().unwrap();
        assert!((temperature - 0.3).abs() < 1e-6);
        assert!((top_p - 0.95).abs() < 1e-6);
        assert!(json["generationConfig"].get("responseMimeType").is_none());
        assert!(json["generationConfig"].get("responseSchema").is_none());
    }

    #[test]
    fn test_schema_requests_json_output() {
        let schema = serde_json::json!({
            "type": "object",
            "properties": { "category": { "type": "string" } }
        });
        let request = GenerateRequest::text("classify").with_output_schema(schema.clone());

        let wire = to_wire_request(&request);
        let json = serde_json::to_value(&wire).unwrap();

        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(json["generationConfig"]["responseSchema"], schema);
    }

    #[test]
    fn test_binary_part_is_inlined_as_base64() {
        let request = GenerateRequest::parts(vec![
            Input::Text("describe this".to_string()),
            Input::Document {
                mime: Some("application/pdf".to_string()),
                source: MediaSource::Binary(vec![0x25, 0x50, 0x44, 0x46]),
                filename: Some("evidence.pdf".to_string()),
            },
        ]);

        let wire = to_wire_request(&request);
        let json = serde_json::to_value(&wire).unwrap();
        let inline = &json["contents"][0]["parts"][1]["inlineData"];

        assert_eq!(inline["mimeType"], "application/pdf");
        assert_eq!(inline["data"], "JVBERg==");
    }

    #[test]
    fn test_response_text_is_concatenated() {
        let body = serde_json::json!({
            "candidates": [
                { "content": { "parts": [ { "text": "first " }, { "text": "second" } ] } }
            ]
        });
        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();

        assert_eq!(text_from_response(&response).unwrap(), "first second");
    }

    #[test]
    fn test_empty_response_is_an_error() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({})).unwrap();

        let err = text_from_response(&response).unwrap_err();
        assert_eq!(err.kind, GeminiErrorKind::EmptyCandidates);
    }
}
