use meshscope::capture::{decode_hex, triage_line, Line, RecordError, FP_PLACEHOLDER};
use meshscope::config::Config;
use meshscope::watch::Watcher;

#[test]
fn firmware_chatter_is_passthrough() {
    let chatter = [
        "=== Heltec V3.2 MeshCORE Deep RF Sniffer ===",
        "Radio initialised OK",
        "Listening...",
    ];
    for line in chatter {
        assert!(matches!(triage_line(line), Line::Passthrough));
    }
}

#[test]
fn full_firmware_record_round_trips() {
    let line = concat!(
        r#"{"type":"rf","ts":123456,"ptype":17,"fp":"A1B2C3D4E5F60718","state":0,"#,
        r#""crc":true,"rssi":-92.5,"snr":7.25,"reported_len":12,"len":12,"#,
        r#""hex":"110301020304050607084142"}"#
    );
    let record = match triage_line(line) {
        Line::Capture(record) => record,
        Line::Passthrough => panic!("expected capture"),
    };
    assert_eq!(record.fp, "A1B2C3D4E5F60718");
    assert_eq!(record.crc, Some(true));
    assert_eq!(record.payload().unwrap().len(), 12);

    let mut watcher = Watcher::new(Config::default());
    let report = watcher.process_line(line).expect("report");
    assert!(report.contains("FP A1B2C3D4E5F60718"));
    assert!(report.contains("LEN:12  CRC:true  RSSI:-92.5  SNR:7.25"));
    assert!(report.contains("TYPE: advert (0x11)"));
    assert!(report.contains("text: AB"));
}

#[test]
fn malformed_hex_is_a_recoverable_record_error() {
    assert!(matches!(
        decode_hex("abc"),
        Err(RecordError::OddHexLength(3))
    ));
    assert!(matches!(
        decode_hex("a_cd"),
        Err(RecordError::InvalidHexDigit { offset: 1, .. })
    ));

    // The stream keeps going after a bad record.
    let mut watcher = Watcher::new(Config::default());
    assert!(watcher
        .process_line(r#"{"type":"rf","hex":"nothex","fp":"AA"}"#)
        .is_none());
    assert!(watcher
        .process_line(r#"{"type":"rf","hex":"1100","fp":"AA"}"#)
        .is_some());
}

#[test]
fn empty_payload_reports_empty_frame() {
    let mut watcher = Watcher::new(Config::default());
    let report = watcher
        .process_line(r#"{"type":"rf","hex":"","fp":"00AA"}"#)
        .expect("report");
    assert!(report.contains("TYPE: empty"));
}

#[test]
fn missing_fp_uses_placeholder_in_report() {
    let mut watcher = Watcher::new(Config::default());
    let report = watcher
        .process_line(r#"{"type":"rf","hex":"42"}"#)
        .expect("report");
    assert!(report.contains(&format!("FP {}", FP_PLACEHOLDER)));
}
