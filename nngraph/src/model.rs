//! Network description as read from a JSON model file.
//!
//! ```json
//! { "net": {
//!     "populations": { "P": { "properties": { "color": "0 0 1" }, "size": 10 } },
//!     "inputs":      { "stim": { "population": "P", "input_source": "pulse" } },
//!     "projections": { "P_P": { "presynaptic": "P", "postsynaptic": "P",
//!                               "synapse": "ampaSyn", "weight": 5 } } } }
//! ```
//!
//! Maps keep their file order, which is the order nodes and edges are
//! inserted in. Unknown keys are ignored.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};

use crate::error::{GraphError, Result};
use crate::synapse::{Directionality, SynapseKind};

#[derive(Clone, Debug, PartialEq)]
pub struct NetworkModel {
    pub id: String,
    pub populations: Vec<Population>,
    pub inputs: Vec<Input>,
    pub projections: Vec<Projection>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Population {
    pub id: String,
    /// Color spec as declared, `"r g b"` or `"r g b a"`.
    pub color: String,
    pub size: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Input {
    pub id: String,
    /// Target population.
    pub population: String,
    /// Key into `input_sources`; carried along, never resolved.
    pub source: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    pub id: String,
    pub presynaptic: String,
    pub postsynaptic: String,
    pub synapse: SynapseKind,
    /// `random_connectivity.probability`; absent means complete connectivity.
    pub probability: Option<f64>,
    pub directionality: Directionality,
    /// Kept as the JSON number so labels print it the way the file spells it.
    pub weight: Option<Number>,
    pub delay: Option<Number>,
}

#[derive(Deserialize)]
struct RawPopulation {
    properties: RawProperties,
    size: f64,
}

#[derive(Deserialize)]
struct RawProperties {
    color: String,
}

#[derive(Deserialize)]
struct RawInput {
    population: String,
    input_source: String,
}

#[derive(Deserialize)]
struct RawProjection {
    presynaptic: String,
    postsynaptic: String,
    #[serde(default)]
    synapse: Option<String>,
    #[serde(default)]
    random_connectivity: Option<RawConnectivity>,
    #[serde(default)]
    directionality: Option<String>,
    #[serde(default)]
    weight: Option<Number>,
    #[serde(default)]
    delay: Option<Number>,
}

#[derive(Deserialize)]
struct RawConnectivity {
    #[serde(default)]
    probability: Option<f64>,
}

impl NetworkModel {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Decode an already parsed document.
    ///
    /// The document must hold exactly one network; picking "the first" of
    /// several would silently drop the rest.
    pub fn from_value(value: &Value) -> Result<Self> {
        let top = value
            .as_object()
            .ok_or_else(|| GraphError::malformed("top level must be an object"))?;

        let (id, network) = match top.len() {
            0 => return Err(GraphError::malformed("model declares no network")),
            1 => top
                .iter()
                .next()
                .ok_or_else(|| GraphError::malformed("model declares no network"))?,
            n => {
                let ids: Vec<&str> = top.keys().map(String::as_str).collect();
                return Err(GraphError::malformed(format!(
                    "expected a single network, found {n}: {}",
                    ids.join(", ")
                )));
            }
        };

        let network = network
            .as_object()
            .ok_or_else(|| GraphError::malformed(format!("network '{id}' must be an object")))?;

        let populations = section(network, id, "populations", true)?
            .map(|entries| {
                entries
                    .iter()
                    .map(|(pop_id, raw)| decode_population(pop_id, raw))
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?
            .unwrap_or_default();

        let inputs = section(network, id, "inputs", false)?
            .map(|entries| {
                entries
                    .iter()
                    .map(|(input_id, raw)| decode_input(input_id, raw))
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?
            .unwrap_or_default();

        let projections = section(network, id, "projections", true)?
            .map(|entries| {
                entries
                    .iter()
                    .map(|(proj_id, raw)| decode_projection(proj_id, raw))
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            id: id.clone(),
            populations,
            inputs,
            projections,
        })
    }
}

/// Look up a map-valued section. Optional sections may be absent or `null`.
fn section<'a>(
    network: &'a Map<String, Value>,
    network_id: &str,
    key: &str,
    required: bool,
) -> Result<Option<&'a Map<String, Value>>> {
    match network.get(key) {
        Some(Value::Object(entries)) => Ok(Some(entries)),
        None | Some(Value::Null) if !required => Ok(None),
        None => Err(GraphError::malformed(format!(
            "network '{network_id}' is missing '{key}'"
        ))),
        Some(_) => Err(GraphError::malformed(format!(
            "'{key}' of network '{network_id}' must be an object"
        ))),
    }
}

/// Missing fields are reported by the entry itself; type errors also name
/// the field, e.g. `projection 'p', field 'weight': invalid type ...`.
fn decode<T: DeserializeOwned>(kind: &str, id: &str, raw: &Value) -> Result<T> {
    serde_path_to_error::deserialize(raw).map_err(|e| {
        let path = e.path().to_string();
        let inner = e.inner();
        if path == "." {
            GraphError::malformed(format!("{kind} '{id}': {inner}"))
        } else {
            GraphError::malformed(format!("{kind} '{id}', field '{path}': {inner}"))
        }
    })
}

fn decode_population(id: &str, raw: &Value) -> Result<Population> {
    let RawPopulation { properties, size } = decode("population", id, raw)?;
    if !size.is_finite() || size <= 0.0 {
        return Err(GraphError::malformed(format!(
            "population '{id}': size must be a positive number, got {size}"
        )));
    }
    Ok(Population {
        id: id.to_string(),
        color: properties.color,
        size,
    })
}

fn decode_input(id: &str, raw: &Value) -> Result<Input> {
    let RawInput {
        population,
        input_source,
    } = decode("input", id, raw)?;
    Ok(Input {
        id: id.to_string(),
        population,
        source: input_source,
    })
}

fn decode_projection(id: &str, raw: &Value) -> Result<Projection> {
    let raw: RawProjection = decode("projection", id, raw)?;
    Ok(Projection {
        id: id.to_string(),
        presynaptic: raw.presynaptic,
        postsynaptic: raw.postsynaptic,
        synapse: raw
            .synapse
            .as_deref()
            .map(SynapseKind::from_name)
            .unwrap_or_default(),
        probability: raw.random_connectivity.and_then(|rc| rc.probability),
        directionality: Directionality::from_name(raw.directionality.as_deref()),
        weight: raw.weight,
        delay: raw.delay,
    })
}
