//! Dispatch table binding component properties to callbacks.
//!
//! Each registration ties one output property (e.g. `graph-with-slider.figure`)
//! to an ordered list of input properties. An update request names the output
//! and carries the current input values; the registry checks them against the
//! registration and runs the handler.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// A property of a layout component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyRef {
    pub id: String,
    pub property: String,
}

impl PropertyRef {
    pub fn new(id: impl Into<String>, property: impl Into<String>) -> Self {
        PropertyRef {
            id: id.into(),
            property: property.into(),
        }
    }

    /// Parses the `<id>.<property>` form. Component ids may contain dots;
    /// the property is everything after the last one.
    pub fn parse(value: &str) -> Result<Self, CallbackError> {
        match value.rsplit_once('.') {
            Some((id, property)) if !id.is_empty() && !property.is_empty() => {
                Ok(PropertyRef::new(id, property))
            }
            _ => Err(CallbackError::InvalidInput(format!(
                "Expected '<id>.<property>', got '{}'",
                value
            ))),
        }
    }
}

impl std::fmt::Display for PropertyRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.id, self.property)
    }
}

/// Handler invoked with input values in registration order.
pub type CallbackFn = Box<dyn Fn(&[Value]) -> Result<Value, CallbackError> + Send + Sync>;

struct Registration {
    output: PropertyRef,
    inputs: Vec<PropertyRef>,
    handler: CallbackFn,
}

/// Current value of one input property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputValue {
    pub id: String,
    pub property: String,
    pub value: Value,
}

/// Body of an update request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// Output in `<id>.<property>` form
    pub output: String,
    pub inputs: Vec<InputValue>,
}

/// `{"response": {<id>: {<property>: value}}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub response: Map<String, Value>,
}

impl UpdateResponse {
    fn new(output: &PropertyRef, value: Value) -> Self {
        let mut properties = Map::new();
        properties.insert(output.property.clone(), value);
        let mut response = Map::new();
        response.insert(output.id.clone(), Value::Object(properties));
        UpdateResponse { response }
    }

    /// Value produced for `output`, if present.
    pub fn get(&self, output: &PropertyRef) -> Option<&Value> {
        self.response
            .get(&output.id)
            .and_then(|properties| properties.get(&output.property))
    }
}

/// Public description of a registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    pub output: String,
    pub inputs: Vec<PropertyRef>,
}

/// Registered callbacks, keyed by output property.
#[derive(Default)]
pub struct CallbackRegistry {
    registrations: Vec<Registration>,
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("dependencies", &self.dependencies())
            .finish()
    }
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` as the producer of `output`.
    ///
    /// # Errors
    /// Returns `CallbackError::DuplicateOutput` if the output already has a callback.
    pub fn register(
        &mut self,
        output: PropertyRef,
        inputs: Vec<PropertyRef>,
        handler: CallbackFn,
    ) -> Result<(), CallbackError> {
        if self.find(&output).is_some() {
            return Err(CallbackError::DuplicateOutput(output.to_string()));
        }

        debug!(output = %output, inputs = inputs.len(), "registered callback");

        self.registrations.push(Registration {
            output,
            inputs,
            handler,
        });
        Ok(())
    }

    fn find(&self, output: &PropertyRef) -> Option<&Registration> {
        self.registrations
            .iter()
            .find(|registration| &registration.output == output)
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn dependencies(&self) -> Vec<Dependency> {
        self.registrations
            .iter()
            .map(|registration| Dependency {
                output: registration.output.to_string(),
                inputs: registration.inputs.clone(),
            })
            .collect()
    }

    /// Runs the callback registered for the request's output.
    ///
    /// Inputs must match the registration one-to-one, in order.
    pub fn dispatch(&self, request: &UpdateRequest) -> Result<UpdateResponse, CallbackError> {
        let output = PropertyRef::parse(&request.output)?;
        let registration = self
            .find(&output)
            .ok_or_else(|| CallbackError::UnknownOutput(request.output.clone()))?;

        let supplied: Vec<PropertyRef> = request
            .inputs
            .iter()
            .map(|input| PropertyRef::new(input.id.as_str(), input.property.as_str()))
            .collect();

        if supplied != registration.inputs {
            return Err(CallbackError::InputMismatch {
                expected: registration.inputs.iter().map(ToString::to_string).collect(),
                actual: supplied.iter().map(ToString::to_string).collect(),
            });
        }

        let values: Vec<Value> = request.inputs.iter().map(|input| input.value.clone()).collect();
        let value = (registration.handler)(&values)?;

        Ok(UpdateResponse::new(&output, value))
    }
}

/// Errors raised while registering or dispatching callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackError {
    /// No callback produces this output
    UnknownOutput(String),
    /// Output already has a callback
    DuplicateOutput(String),
    /// Request inputs differ from the registered ones
    InputMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },
    /// Input value has the wrong shape
    InvalidInput(String),
    /// Handler failed to produce a value
    Internal(String),
}

impl std::fmt::Display for CallbackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallbackError::UnknownOutput(output) => write!(f, "No callback for output: {}", output),
            CallbackError::DuplicateOutput(output) => {
                write!(f, "Output already registered: {}", output)
            }
            CallbackError::InputMismatch { expected, actual } => write!(
                f,
                "Input mismatch: expected [{}], got [{}]",
                expected.join(", "),
                actual.join(", ")
            ),
            CallbackError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CallbackError::Internal(msg) => write!(f, "Callback failed: {}", msg),
        }
    }
}

impl std::error::Error for CallbackError {}

impl From<serde_json::Error> for CallbackError {
    fn from(err: serde_json::Error) -> Self {
        CallbackError::Internal(err.to_string())
    }
}
