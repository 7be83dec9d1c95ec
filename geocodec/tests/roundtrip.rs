use approx::assert_abs_diff_eq;
use geocodec::{AxisOrder, CodecConfig, GeoJsonDecoder, GeoJsonEncoder};
use geocodec_types::{Coordinate, CoordinateSequence, Geom, Geometry, Polygon, Srid};
use serde_json::json;

/// Deterministic source of coordinates, so that failures can be reproduced.
struct Coordinates {
    state: u64,
    with_z: bool,
}

impl Coordinates {
    fn new(seed: u64, with_z: bool) -> Self {
        Self {
            state: seed,
            with_z,
        }
    }

    fn next_value(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.state >> 33) % 1000) as f64
    }

    fn coordinate(&mut self) -> Coordinate {
        let x = self.next_value();
        let y = self.next_value();
        if self.with_z {
            Coordinate::with_z(x, y, self.next_value())
        } else {
            Coordinate::new(x, y)
        }
    }

    fn sequence(&mut self, len: usize) -> CoordinateSequence {
        (0..len).map(|_| self.coordinate()).collect()
    }

    fn ring(&mut self) -> CoordinateSequence {
        let first = self.coordinate();
        let mut ring = vec![first];
        ring.extend((0..3).map(|_| self.coordinate()));
        ring.push(first);
        ring.into()
    }

    fn polygon(&mut self) -> Polygon {
        Polygon::new(self.ring(), vec![self.ring(), self.ring(), self.ring()])
    }

    fn point(&mut self, srid: Srid) -> Geometry {
        Geometry::new(Geom::Point(self.coordinate()), srid)
    }

    fn line_string(&mut self, srid: Srid) -> Geometry {
        Geometry::new(Geom::LineString(self.sequence(3)), srid)
    }

    fn multi_point(&mut self, srid: Srid) -> Geometry {
        Geometry::new(Geom::MultiPoint(self.sequence(6)), srid)
    }

    fn multi_line_string(&mut self, srid: Srid) -> Geometry {
        let lines = (0..3).map(|_| self.sequence(3)).collect();
        Geometry::new(Geom::MultiLineString(lines), srid)
    }

    fn polygon_geometry(&mut self, srid: Srid) -> Geometry {
        Geometry::new(Geom::Polygon(self.polygon()), srid)
    }

    fn multi_polygon(&mut self, srid: Srid) -> Geometry {
        let polygons = (0..3).map(|_| self.polygon()).collect();
        Geometry::new(Geom::MultiPolygon(polygons), srid)
    }

    fn collection(&mut self, srid: Srid) -> Geometry {
        Geometry::new(
            Geom::GeometryCollection(vec![
                self.point(srid),
                self.multi_point(srid),
                self.line_string(srid),
                self.multi_line_string(srid),
                self.polygon_geometry(srid),
                self.multi_polygon(srid),
            ]),
            srid,
        )
    }
}

/// Encodes, decodes and encodes again. Both the geometry and its encoded form must survive.
fn read_write(geometry: &Geometry) {
    let encoder = GeoJsonEncoder::default();
    let decoder = GeoJsonDecoder::default();

    let json = encoder
        .encode_geometry(Some(geometry))
        .expect("empty geometry");
    let parsed = decoder
        .decode_geometry(Some(&json))
        .expect("failed to decode")
        .expect("no geometry");
    let json2 = encoder
        .encode_geometry(Some(&parsed))
        .expect("empty geometry");

    assert_eq!(&parsed, geometry);
    assert_eq!(json, json2);
}

#[test]
fn point() {
    read_write(&Coordinates::new(1, false).point(Srid::new(2000)));
    read_write(&Coordinates::new(2, true).point(Srid::new(2000)));
}

#[test]
fn multi_point() {
    read_write(&Coordinates::new(3, false).multi_point(Srid::WGS84));
    read_write(&Coordinates::new(4, true).multi_point(Srid::WGS84));
}

#[test]
fn line_string() {
    read_write(&Coordinates::new(5, false).line_string(Srid::WGS84));
    read_write(&Coordinates::new(6, true).line_string(Srid::WGS84));
}

#[test]
fn multi_line_string() {
    read_write(&Coordinates::new(7, false).multi_line_string(Srid::WGS84));
    read_write(&Coordinates::new(8, true).multi_line_string(Srid::WGS84));
}

#[test]
fn polygon() {
    read_write(&Coordinates::new(9, false).polygon_geometry(Srid::WGS84));
    read_write(&Coordinates::new(10, true).polygon_geometry(Srid::WGS84));
}

#[test]
fn multi_polygon() {
    read_write(&Coordinates::new(11, false).multi_polygon(Srid::WGS84));
    read_write(&Coordinates::new(12, true).multi_polygon(Srid::WGS84));
}

#[test]
fn geometry_collection() {
    for with_z in [false, true] {
        let mut coordinates = Coordinates::new(13, with_z);
        let collection = Geometry::new(
            Geom::GeometryCollection(vec![
                coordinates.collection(Srid::WGS84),
                coordinates.collection(Srid::new(2000)),
            ]),
            Srid::WGS84,
        );
        read_write(&collection);
    }
}

#[test]
fn crs_combinations() {
    let default_srid = CodecConfig::default().default_srid;
    let encoder = GeoJsonEncoder::default();
    let decoder = GeoJsonDecoder::default();

    for (parent, child) in [
        (0, 0),
        (2000, 0),
        (4326, 0),
        (4326, 2000),
        (0, 2000),
        (0, 4326),
        (2000, 2000),
        (4326, 4326),
        (2000, 2001),
    ] {
        let (parent, child) = (Srid::new(parent), Srid::new(child));
        let collection = Geometry::new(
            Geom::GeometryCollection(vec![Coordinates::new(14, false).point(child)]),
            parent,
        );

        let json = encoder
            .encode_geometry(Some(&collection))
            .expect("empty geometry");
        let parsed = decoder
            .decode_geometry(Some(&json))
            .expect("failed to decode")
            .expect("no geometry");

        // Unset SRIDs are never written, so they come back as the SRID they are nested in.
        let expected_parent = if parent.is_unset() { default_srid } else { parent };
        let expected_child = if child.is_unset() {
            expected_parent
        } else {
            child
        };

        assert_eq!(parsed.srid, expected_parent, "{parent}/{child}");
        let Geom::GeometryCollection(members) = &parsed.geom else {
            panic!("not a collection: {parsed:?}");
        };
        assert_eq!(members[0].srid, expected_child, "{parent}/{child}");

        assert_eq!(
            encoder.encode_geometry(Some(&parsed)),
            Some(json),
            "{parent}/{child}"
        );
    }
}

#[test]
fn line_string_without_crs_is_unchanged() {
    let node = json!({"type": "LineString", "coordinates": [[1, 2], [3, 4], [5, 6]]});
    let decoded = GeoJsonDecoder::default()
        .decode_geometry(Some(&node))
        .expect("failed to decode")
        .expect("no geometry");
    assert_eq!(decoded.srid, Srid::WGS84);

    assert_eq!(
        GeoJsonEncoder::default().encode_geometry(Some(&decoded)),
        Some(json!({"type": "LineString", "coordinates": [[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]}))
    );
}

#[test]
fn named_crs_is_written_as_link() {
    let node = json!({
        "type": "Point",
        "coordinates": [7.5, 51.9],
        "crs": {"type": "name", "properties": {"name": "EPSG:4326"}}
    });
    let decoded = GeoJsonDecoder::default()
        .decode_geometry(Some(&node))
        .expect("failed to decode")
        .expect("no geometry");
    assert_eq!(decoded.srid, Srid::WGS84);

    let encoded = GeoJsonEncoder::default()
        .encode(&decoded, Srid::WEB_MERCATOR)
        .expect("empty geometry");
    assert_eq!(
        encoded["crs"],
        json!({"type": "link", "properties": {"href": "http://www.opengis.net/def/crs/EPSG/0/4326"}})
    );
}

#[test]
fn empty_geometries_are_asymmetric() {
    let node = json!({"type": "LineString", "coordinates": []});
    let decoded = GeoJsonDecoder::default()
        .decode_geometry(Some(&node))
        .expect("failed to decode")
        .expect("no geometry");
    assert!(decoded.is_empty());

    assert_eq!(GeoJsonEncoder::default().encode_geometry(Some(&decoded)), None);
}

#[test]
fn empty_collection_members_are_dropped() {
    let point = Coordinates::new(16, false).point(Srid::WGS84);
    let collection = Geometry::from(Geom::GeometryCollection(vec![
        point.clone(),
        Geometry::from(Geom::LineString(CoordinateSequence::default())),
    ]));

    let json = GeoJsonEncoder::default()
        .encode_geometry(Some(&collection))
        .expect("empty geometry");
    assert_eq!(json["geometries"].as_array().map(Vec::len), Some(1));

    let parsed = GeoJsonDecoder::default()
        .decode_geometry(Some(&json))
        .expect("failed to decode")
        .expect("no geometry");
    assert_ne!(parsed, collection);
    assert_eq!(
        parsed,
        Geometry::from(Geom::GeometryCollection(vec![point]))
    );
}

#[test]
fn round_trip_with_any_parent_srid() {
    let encoder = GeoJsonEncoder::default();
    let decoder = GeoJsonDecoder::default();

    for parent in [Srid::WGS84, Srid::WEB_MERCATOR, Srid::new(2000), Srid::UNSET] {
        for srid in [Srid::WGS84, Srid::WEB_MERCATOR, Srid::new(31466)] {
            let mut coordinates = Coordinates::new(u64::from(srid.code()), true);
            for geometry in [
                coordinates.point(srid),
                coordinates.polygon_geometry(srid),
                coordinates.collection(srid),
            ] {
                let json = encoder
                    .encode(&geometry, parent)
                    .expect("empty geometry");
                let parsed = decoder
                    .decode(&json, parent)
                    .expect("failed to decode");
                assert_eq!(parsed, geometry, "{srid} under {parent}");
            }
        }
    }
}

#[test]
fn custom_default_srid() {
    let config = CodecConfig::default().with_default_srid(Srid::new(25832));
    let encoder = GeoJsonEncoder::new(config);
    let decoder = GeoJsonDecoder::new(config);

    let point = Coordinates::new(15, true).point(Srid::new(25832));
    let json = encoder.encode_geometry(Some(&point)).expect("empty geometry");
    assert!(json.get("crs").is_none());

    let parsed = decoder
        .decode_geometry(Some(&json))
        .expect("failed to decode")
        .expect("no geometry");
    assert_eq!(parsed, point);

    // Read by a codec with another default SRID, the point silently changes its reference system.
    let parsed = GeoJsonDecoder::default()
        .decode_geometry(Some(&json))
        .expect("failed to decode")
        .expect("no geometry");
    assert_eq!(parsed.srid, Srid::WGS84);
}

#[test]
fn lat_lon_axis_order() {
    let config = CodecConfig::default().with_axis_order(AxisOrder::LatLon);
    let node = json!({"type": "MultiPoint", "coordinates": [[51.9607, 7.6261], [52.5200, 13.4050]]});

    let decoded = GeoJsonDecoder::new(config)
        .decode_geometry(Some(&node))
        .expect("failed to decode")
        .expect("no geometry");
    let Geom::MultiPoint(points) = &decoded.geom else {
        panic!("not a multi point: {decoded:?}");
    };
    let first = points.first().expect("no points");
    assert_abs_diff_eq!(first.x(), 7.6261, epsilon = 1e-9);
    assert_abs_diff_eq!(first.y(), 51.9607, epsilon = 1e-9);

    let encoded = GeoJsonEncoder::new(config)
        .encode_geometry(Some(&decoded))
        .expect("empty geometry");
    let second = encoded["coordinates"][1]
        .as_array()
        .expect("not an array");
    assert_abs_diff_eq!(second[0].as_f64().unwrap_or_default(), 52.52, epsilon = 1e-9);
    assert_abs_diff_eq!(second[1].as_f64().unwrap_or_default(), 13.405, epsilon = 1e-9);
}

#[test]
fn decoded_document_from_text() {
    let geometry = GeoJsonDecoder::default()
        .decode_str(
            r#"{
                "type": "GeometryCollection",
                "crs": {"type": "name", "properties": {"name": "urn:ogc:def:crs:EPSG::3857"}},
                "geometries": [
                    {"type": "Point", "coordinates": [1000.5, 2000.25]},
                    {"type": "Point", "coordinates": [1, 2], "crs": {"type": "link", "properties": {"href": "http://spatialreference.org/ref/epsg/25832"}}}
                ]
            }"#,
        )
        .expect("failed to decode")
        .expect("no geometry");

    let Geom::GeometryCollection(members) = &geometry.geom else {
        panic!("not a collection: {geometry:?}");
    };
    assert_eq!(geometry.srid, Srid::WEB_MERCATOR);
    assert_eq!(members[0].srid, Srid::WEB_MERCATOR);
    assert_eq!(members[1].srid, Srid::new(25832));
}
