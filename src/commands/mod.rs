//! Tauri Command Wrappers
//!
//! Frontend bindings to the to-do service commands.

mod todo;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::ServiceError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// Re-export all public items
pub use todo::*;

/// Marshal command arguments into a JS object
fn encode_args<A: Serialize>(command: &'static str, args: &A) -> Result<JsValue, ServiceError> {
    serde_wasm_bindgen::to_value(args).map_err(|e| ServiceError::Encode {
        command,
        message: e.to_string(),
    })
}

/// Invoke `command` and decode its response
async fn call<T: DeserializeOwned>(command: &'static str, args: JsValue) -> Result<T, ServiceError> {
    let result = invoke(command, args).await.map_err(|e| ServiceError::Invoke {
        command,
        message: e.as_string().unwrap_or_else(|| format!("{:?}", e)),
    })?;
    serde_wasm_bindgen::from_value(result).map_err(|e| ServiceError::Decode {
        command,
        message: e.to_string(),
    })
}
