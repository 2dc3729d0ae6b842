//! End-to-end runs of the `tc-cli` binary.

use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::{json, Value};

const BIN: &str = env!("CARGO_BIN_EXE_tc-cli");

const DOCUMENT: &str = r#"{
    "base_requests": [
        {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0},
        {"type": "Stop", "name": "B", "latitude": 0.0, "longitude": 0.01},
        {"type": "Bus", "name": "1", "stops": ["A", "B"], "is_roundtrip": false}
    ],
    "routing_settings": {"bus_wait_time": 6, "bus_velocity": 60},
    "stat_requests": [
        {"id": 1, "type": "Route", "from": "A", "to": "B"},
        {"id": 2, "type": "Stop", "name": "B"},
        {"id": 3, "type": "Bus", "name": "2"}
    ]
}"#;

fn check(out: &Value) {
    let out = out.as_array().expect("response array");
    assert_eq!(out.len(), 3);

    let route = &out[0];
    assert_eq!(route["request_id"], json!(1));
    // 6 min wait plus ~1112 m at 60 km/h.
    let total = route["total_time"].as_f64().unwrap();
    assert!((total - 7.112).abs() < 0.001, "got {total}");
    assert_eq!(route["items"][0], json!({"type": "Wait", "stop_name": "A", "time": 6.0}));
    assert_eq!(route["items"][1]["type"], json!("Bus"));
    assert_eq!(route["items"][1]["span_count"], json!(1));

    assert_eq!(out[1], json!({"request_id": 2, "buses": ["1"]}));
    assert_eq!(out[2], json!({"request_id": 3, "error_message": "not found"}));
}

#[test]
fn file_in_file_out() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("requests.json");
    let output = dir.path().join("responses.json");
    std::fs::write(&input, DOCUMENT).unwrap();

    let status = Command::new(BIN)
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--pretty")
        .status()
        .unwrap();
    assert!(status.success());

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains('\n'));
    check(&serde_json::from_str(&text).unwrap());
}

#[test]
fn stdin_to_stdout() {
    let mut child = Command::new(BIN)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(DOCUMENT.as_bytes()).unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    check(&serde_json::from_slice(&out.stdout).unwrap());
}

#[test]
fn malformed_input_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"base_requests\": [").unwrap();

    let out = Command::new(BIN)
        .arg("--input")
        .arg(file.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("failed to read request document"));
}

#[test]
fn text_format_from_stdin() {
    let input = "3\n\
                 Stop A: 0.0, 0.0, 1200m to B\n\
                 Stop B: 0.0, 0.01\n\
                 Bus 1: A - B\n\
                 3\n\
                 Bus 1\n\
                 Stop B\n\
                 Bus 2\n";
    let mut child = Command::new(BIN)
        .args(["--format", "text"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());

    let text = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    // 1200 m each way against ~1112 m as the crow flies.
    assert!(lines[0].starts_with("Bus 1: 3 stops on route, 2 unique stops, 2400 route length, 1.079"), "got {}", lines[0]);
    assert_eq!(lines[1], "Stop B: buses 1");
    assert_eq!(lines[2], "Bus 2: not found");
}

#[test]
fn text_format_reports_bad_line() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"1\nStop A 0.0, 0.0\n").unwrap();

    let out = Command::new(BIN)
        .args(["--format", "text", "--input"])
        .arg(file.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("line 2"));
}

#[test]
fn map_request_in_json_batch() {
    let document = r#"{
        "base_requests": [
            {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0},
            {"type": "Stop", "name": "B", "latitude": 0.01, "longitude": 0.01},
            {"type": "Bus", "name": "1", "stops": ["A", "B", "A"], "is_roundtrip": true}
        ],
        "render_settings": {
            "width": 400, "height": 400, "padding": 50,
            "line_width": 10, "stop_radius": 4,
            "bus_label_font_size": 16, "bus_label_offset": [5, 10],
            "stop_label_font_size": 12, "stop_label_offset": [5, -5],
            "underlayer_color": "white", "underlayer_width": 2,
            "color_palette": ["purple"]
        },
        "stat_requests": [
            {"id": 1, "type": "Stop", "name": "A"},
            {"id": 2, "type": "Map"}
        ]
    }"#;
    let mut child = Command::new(BIN)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(document.as_bytes()).unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());

    let value: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value[0], json!({"request_id": 1, "buses": ["1"]}));
    assert_eq!(value[1]["request_id"], json!(2));
    let map = value[1]["map"].as_str().unwrap();
    assert!(map.contains(r#"stroke="purple""#));
    assert!(map.contains(r#"<circle cx="50" cy="350" r="4" fill="white" />"#));
}
