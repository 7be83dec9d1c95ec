//! Decodes a GeoJSON document and prints it encoded again.
//!
//! The document may be a single geometry, a `Feature` or a `FeatureCollection`. An optional second argument points
//! to a JSON file with the codec configuration.
//!
//! ```shell
//! RUST_LOG=debug cargo run --example roundtrip --features geojson -- ./stations.geojson ./codec.json
//! ```

use anyhow::{anyhow, Result};
use geocodec::{json, CodecConfig, GeoJsonDecoder, GeoJsonEncoder};
use serde_json::Value;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(file_name) = args.next() else {
        return Err(anyhow!(
            "This example must be run with the name of the .geojson file to load"
        ));
    };

    let config = match args.next() {
        Some(config_file) => CodecConfig::from_json_str(&std::fs::read_to_string(config_file)?)?,
        None => CodecConfig::default(),
    };
    log::info!(
        "Default SRID {}, axis order {:?}",
        config.default_srid,
        config.axis_order
    );

    let decoder = GeoJsonDecoder::new(config);
    let encoder = GeoJsonEncoder::new(config);

    let document = json::read_file(&file_name)?;
    let output = match document.get("type").and_then(Value::as_str) {
        Some("Feature") => encoder.encode_feature(&decoder.decode_feature(&document)?),
        Some("FeatureCollection") => {
            let features = document
                .get("features")
                .and_then(Value::as_array)
                .ok_or_else(|| anyhow!("FeatureCollection without features"))?
                .iter()
                .map(|feature| decoder.decode_feature(feature))
                .collect::<Result<Vec<_>, _>>()?;
            log::info!("Decoded {} features", features.len());
            encoder.encode_feature_collection(&features)
        }
        _ => {
            let geometry = decoder
                .decode_geometry(Some(&document))?
                .ok_or_else(|| anyhow!("Document is empty"))?;
            log::info!(
                "Decoded {} in SRID {}",
                geometry.geometry_type(),
                geometry.srid
            );

            match encoder.encode_geojson(&geometry, config.default_srid)? {
                Some(geojson) => serde_json::to_value(&geojson)?,
                None => Value::Null,
            }
        }
    };

    println!("{}", json::to_pretty_string(&output));

    Ok(())
}
