// src/api/json_api.rs
use std::io::Read;
use log::{info, error};

use crate::api::types::{
    PasswordAnalysisResponse, PasswordGenerationRequest, PasswordGenerationResponse,
};
use crate::generators::{PasswordGenerator, RandomSource};
use crate::models::GenerationConfig;
use crate::strength;

/// Generate one password and describe the outcome as a response.
pub fn generate_response<R: RandomSource>(
    generator: &mut PasswordGenerator<R>,
    config: &GenerationConfig,
) -> PasswordGenerationResponse {
    match generator.generate(config) {
        Ok(password) => {
            let strength = strength::score(password.as_str());
            PasswordGenerationResponse {
                success: true,
                length: Some(password.len()),
                password: Some(password.into_string()),
                strength: Some(strength),
                error: None,
            }
        }
        Err(e) => {
            error!("JSON generation failed: {}", e);
            PasswordGenerationResponse {
                success: false,
                password: None,
                length: None,
                strength: None,
                error: Some(format!("Failed to generate password: {}", e)),
            }
        }
    }
}

pub fn analysis_response(password: &str) -> PasswordAnalysisResponse {
    PasswordAnalysisResponse {
        success: true,
        strength: strength::score(password),
        feedback: strength::feedback(password),
    }
}

/// Print `count` generation responses, one JSON object per line.
///
/// Returns `false` once a response reports failure, so the caller can set
/// the exit status.
pub fn handle_generate<R: RandomSource>(
    generator: &mut PasswordGenerator<R>,
    config: &GenerationConfig,
    count: usize,
) -> anyhow::Result<bool> {
    info!("JSON generate: count={}, length={}", count, config.length);
    for _ in 0..count {
        let response = generate_response(generator, config);
        println!("{}", serde_json::to_string(&response)?);
        if !response.success {
            return Ok(false);
        }
    }
    Ok(true)
}

pub fn handle_score(password: &str) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(&analysis_response(password))?);
    Ok(())
}

/// Read a [`PasswordGenerationRequest`] from stdin and answer it.
pub fn handle_stdin_request<R: RandomSource>(
    generator: &mut PasswordGenerator<R>,
    defaults: &GenerationConfig,
) -> anyhow::Result<bool> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let request: PasswordGenerationRequest = if input.trim().is_empty() {
        PasswordGenerationRequest::default()
    } else {
        serde_json::from_str(&input)?
    };

    handle_generate(generator, &request.resolve(defaults), 1)
}
