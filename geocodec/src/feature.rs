//! GeoJSON features wrapping a single geometry.
//!
//! A feature is written as
//!
//! ```json
//! {"type": "Feature", "id": "...", "properties": {"id": "...", "label": "...", ...}, "geometry": {...}}
//! ```
//!
//! The `properties` object repeats the identifying members of the feature (`id`, `label`, `type` and `domainId`)
//! followed by the caller's own properties. A feature without a geometry, or with an empty one, is written as the bare
//! properties object.
//!
//! This output is not the one older GeoJSON feature writers produce. Those always write the `label` and `type`
//! properties, as `null` when unset, and write a feature with `"geometry": null` when its geometry is empty. Here
//! unset members are left out of `properties`, and an empty geometry gives the bare properties object. Clients that
//! rely on the older form need to be checked before switching.

use geocodec_types::Geometry;
use serde_json::{json, Map, Value};

use crate::decoder::{GeoJsonDecoder, TYPE};
use crate::encoder::GeoJsonEncoder;
use crate::error::GeoJsonError;

const FEATURE: &str = "Feature";
const FEATURE_COLLECTION: &str = "FeatureCollection";
const FEATURES: &str = "features";
const ID: &str = "id";
const LABEL: &str = "label";
const DOMAIN_ID: &str = "domainId";
const PROPERTIES: &str = "properties";
const GEOMETRY: &str = "geometry";

/// Named geometry with arbitrary properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feature {
    /// Identifier of the feature.
    pub id: String,
    /// Human-readable name.
    pub label: Option<String>,
    /// Type of the feature, written as the `type` property.
    pub feature_type: Option<String>,
    /// Identifier of the feature in its source system.
    pub domain_id: Option<String>,
    /// Additional properties. On a key clash these take precedence over the members above.
    pub properties: Map<String, Value>,
    /// Geometry of the feature.
    pub geometry: Option<Geometry>,
}

impl Feature {
    /// Creates a feature with no geometry and no properties.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the geometry.
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Adds a property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    fn flat_properties(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        properties.insert(ID.into(), self.id.clone().into());
        if let Some(label) = &self.label {
            properties.insert(LABEL.into(), label.clone().into());
        }
        if let Some(feature_type) = &self.feature_type {
            properties.insert(TYPE.into(), feature_type.clone().into());
        }
        if let Some(domain_id) = &self.domain_id {
            properties.insert(DOMAIN_ID.into(), domain_id.clone().into());
        }

        for (key, value) in &self.properties {
            properties.insert(key.clone(), value.clone());
        }

        properties
    }
}

impl GeoJsonEncoder {
    /// Encodes a feature. The geometry is encoded with the configured default SRID as parent.
    ///
    /// `label`, `type` and `domainId` are written only if set. Without a geometry, or with an empty one, the result
    /// is the properties object alone, not a `Feature` with a `null` geometry. See the [module docs](crate::feature).
    pub fn encode_feature(&self, feature: &Feature) -> Value {
        let properties = feature.flat_properties();
        let Some(geometry) = &feature.geometry else {
            return Value::Object(properties);
        };

        match self.encode_geometry(Some(geometry)) {
            Some(node) => json!({
                TYPE: FEATURE,
                ID: feature.id,
                PROPERTIES: properties,
                GEOMETRY: node,
            }),
            None => {
                log::warn!(
                    "Feature {} has an empty {} geometry, writing properties only",
                    feature.id,
                    geometry.geometry_type()
                );
                Value::Object(properties)
            }
        }
    }

    /// Encodes the features into a `FeatureCollection` object.
    pub fn encode_feature_collection(&self, features: &[Feature]) -> Value {
        let features: Vec<Value> = features.iter().map(|f| self.encode_feature(f)).collect();
        json!({
            TYPE: FEATURE_COLLECTION,
            FEATURES: features,
        })
    }
}

impl GeoJsonDecoder {
    /// Decodes a `Feature` object.
    ///
    /// Identifying members found in `properties` are moved into the corresponding fields of [`Feature`], the rest of
    /// the properties are kept as they are.
    pub fn decode_feature(&self, node: &Value) -> Result<Feature, GeoJsonError> {
        let Value::Object(node) = node else {
            return Err(GeoJsonError::WrongShape("feature has to be an object".into()));
        };

        match node.get(TYPE).and_then(Value::as_str) {
            Some(FEATURE) => {}
            Some(other) => {
                return Err(GeoJsonError::WrongShape(format!(
                    "expected Feature, got {other}"
                )))
            }
            None => return Err(GeoJsonError::WrongShape("expected Feature".into())),
        }

        let id = match node.get(ID) {
            None | Some(Value::Null) => {
                return Err(GeoJsonError::MissingField("missing feature id".into()))
            }
            Some(Value::String(id)) => id.clone(),
            Some(_) => return Err(GeoJsonError::WrongShape("feature id has to be a string".into())),
        };

        let mut properties = match node.get(PROPERTIES) {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(properties)) => properties.clone(),
            Some(_) => {
                return Err(GeoJsonError::WrongShape(
                    "feature properties have to be an object".into(),
                ))
            }
        };

        take_string(&mut properties, ID);
        let label = take_string(&mut properties, LABEL);
        let feature_type = take_string(&mut properties, TYPE);
        let domain_id = take_string(&mut properties, DOMAIN_ID);

        let geometry = self.decode_geometry(node.get(GEOMETRY))?;

        Ok(Feature {
            id,
            label,
            feature_type,
            domain_id,
            properties,
            geometry,
        })
    }
}

/// Removes the property if it is a string. Properties of other kinds stay where they are.
fn take_string(properties: &mut Map<String, Value>, key: &str) -> Option<String> {
    if !properties.get(key).is_some_and(Value::is_string) {
        return None;
    }

    match properties.remove(key) {
        Some(Value::String(value)) => Some(value),
        _ => None,
    }
}
