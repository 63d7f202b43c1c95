mod test_utilities;
use geofeature_geometry::{FeatureId, GeoFeature, Geometry, decode_feature};
use predicates::str;
use pretty_assertions::assert_eq;
use rstest::rstest;
use test_utilities::*;

const POINT: &str = r#"{"type":"Feature","id":"abc","geometry":{"type":"Point","coordinates":[102.0,0.5]},"properties":{"bool":true,"string":"text"}}"#;

#[test]
fn command() {
	geofeature_cmd()
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} [OPTIONS] <COMMAND>")));
}

#[rstest]
#[case("normalize", "[OPTIONS] <INPUT>")]
#[case("probe", "[OPTIONS] <INPUT>")]
#[case("point", "[OPTIONS] <X> <Y>")]
fn subcommand(#[case] sub_command: &str, #[case] usage: &str) {
	geofeature_cmd()
		.arg(sub_command)
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} {sub_command} {usage}")));
}

#[test]
fn normalize_stdin_to_stdout() {
	let output = geofeature_cmd()
		.args(["normalize", "-"])
		.write_stdin(POINT)
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();

	let text = String::from_utf8(output).unwrap();
	assert!(text.starts_with(r#"{"geometry":{"coordinates":[102,0.5],"type":"Point"},"id":"abc","#), "{text}");
	assert!(!text.contains("\"bbox\""));
	assert!(!text.contains("\"crs\""));
	assert!(!text.contains("\"string\""));

	let feature = decode_feature(&text).unwrap();
	assert_eq!(feature.id, Some(FeatureId::from("abc")));
	assert_eq!(feature.geometry, Some(Geometry::new_point([102.0, 0.5])));
}

#[test]
fn normalize_pretty_file() {
	let (_dir, output) = get_temp_output("berlin.geojson");
	geofeature_cmd()
		.args([
			"normalize",
			path_to_str(&get_testdata("berlin.geojson")),
			"--pretty",
			"--output",
			path_to_str(&output),
		])
		.assert()
		.success()
		.stdout(str::is_empty());

	let text = std::fs::read_to_string(&output).unwrap();
	assert!(text.starts_with("{\n  \"bbox\": [ 13.088345, 52.3382448, 13.7611609, 52.6755087 ],\n"), "{text}");
	assert!(text.ends_with("\n  \"type\": \"Feature\"\n}\n"), "{text}");
	assert_eq!(decode_feature(&text).unwrap().properties.osm_id, 62422);
}

#[test]
fn normalize_lines() {
	let output = geofeature_cmd()
		.args(["normalize", "--lines", path_to_str(&get_testdata("places.ndgeojson"))])
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();

	let text = String::from_utf8(output).unwrap();
	let features = text.lines().map(|line| decode_feature(line).unwrap()).collect::<Vec<_>>();
	assert_eq!(features.len(), 3);
	assert_eq!(features[0].id, Some(FeatureId::Number(1.0)));
	assert_eq!(features[1].properties.name.as_deref(), Some("London"));
	assert_eq!(features[2], GeoFeature::default());
}

#[rstest]
#[case("{not json", "while parsing JSON '{not json'")]
#[case(
	r#"{"type":"Feature","geometry":{"type":"NotAShape"}}"#,
	"unknown geometry type 'NotAShape'"
)]
fn normalize_rejects_malformed_input(#[case] input: &str, #[case] message: &str) {
	geofeature_cmd()
		.args(["normalize", "-"])
		.write_stdin(input)
		.assert()
		.failure()
		.code(1)
		.stdout(str::is_empty())
		.stderr(str::contains(message));
}

#[test]
fn normalize_names_the_failing_line() {
	geofeature_cmd()
		.args(["normalize", "--lines", "-"])
		.write_stdin(format!("{POINT}\n{{\"geometry\":{{\"type\":\"Point\"}}}}\n"))
		.assert()
		.failure()
		.stderr(str::contains("line 2: while decoding GeoJSON feature"));
}

#[test]
fn probe() {
	geofeature_cmd()
		.args(["probe", path_to_str(&get_testdata("berlin.geojson"))])
		.assert()
		.success()
		.stdout(str::contains("id:           relation/62422\n"))
		.stdout(str::contains("geometry:     Point\n"))
		.stdout(str::contains("display name: Berlin, Deutschland\n"));
}

#[test]
fn point() {
	geofeature_cmd()
		.args(["point", "1", "2", "--id", "abc", "--bbox"])
		.assert()
		.success()
		.stdout(str::starts_with(
			r#"{"bbox":[1,2,1,2],"geometry":{"coordinates":[1,2],"type":"Point"},"id":"abc","properties":{"#,
		))
		.stdout(str::ends_with("\"type\":\"Feature\"}\n"));
}
