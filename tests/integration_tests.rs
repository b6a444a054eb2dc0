use anyhow::Result;
use httpmock::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use xid_fetch::utils::validation::Validate;
use xid_fetch::{
    CodepointPipeline, EtlEngine, FetchError, FileSink, Settings, TomlConfig, XidProperty,
};

const XID_START_PAGE: &str = r#"<html><head><title>Unicode Utilities: UnicodeSet</title></head>
<body><p>4 Code Points</p><table>
<tr><td>U+0041</td><td>A</td><td>LATIN CAPITAL LETTER A</td></tr>
<tr><td>U+005a</td><td>Z</td><td>LATIN CAPITAL LETTER Z</td></tr>
<tr><td>U+00aa</td><td>ª</td><td>FEMININE ORDINAL INDICATOR</td></tr>
<tr><td>U+1F600</td><td></td><td>not really XID_Start, still captured</td></tr>
</table></body></html>"#;

const EXPECTED_LINE: &str = "'\\u{0041}' | '\\u{005A}' | '\\u{00AA}' | '\\u{1F600}'";

#[tokio::test]
async fn test_end_to_end_to_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("xid_start.txt");

    let server = MockServer::start();
    let list_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/UnicodeJsps/list-unicodeset.jsp")
            .query_param("a", "[:XID_Start:]");
        then.status(200)
            .header("Content-Type", "text/html; charset=UTF-8")
            .body(XID_START_PAGE);
    });

    let settings = Settings {
        endpoint: server.url("/UnicodeJsps/list-unicodeset.jsp"),
        output_path: Some(output.display().to_string()),
        ..Default::default()
    };
    settings.validate()?;

    let sink = FileSink::new(&output);
    let engine = EtlEngine::new(CodepointPipeline::new(sink, settings)?);
    let destination = engine.run().await?;

    list_mock.assert();
    assert_eq!(destination, output.display().to_string());
    assert_eq!(
        std::fs::read_to_string(&output)?,
        format!("{}\n", EXPECTED_LINE)
    );
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_from_toml_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("xid_continue.txt");

    let server = MockServer::start();
    let list_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/list-unicodeset.jsp")
            .query_param("a", "[:XID_Continue:]");
        then.status(200).body("U+0030 U+0039 U+005F");
    });

    let mut config_file = NamedTempFile::new()?;
    write!(
        config_file,
        r#"
[source]
endpoint = "{}"
property = "XID_Continue"
timeout_seconds = 5

[output]
path = "{}"
"#,
        server.url("/list-unicodeset.jsp"),
        output.display().to_string().replace('\\', "/")
    )?;

    let toml = TomlConfig::from_file(config_file.path())?;
    let settings = Settings::default().merge_toml(&toml);
    settings.validate()?;
    assert_eq!(settings.property, XidProperty::Continue);

    let sink = FileSink::new(settings.output_path.clone().unwrap_or_default());
    let engine = EtlEngine::new(CodepointPipeline::new(sink, settings)?);
    engine.run().await?;

    list_mock.assert();
    assert_eq!(
        std::fs::read_to_string(&output)?,
        "'\\u{0030}' | '\\u{0039}' | '\\u{005F}'\n"
    );
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_network_failure_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("never.txt");

    let settings = Settings {
        endpoint: "http://127.0.0.1:1/list-unicodeset.jsp".to_string(),
        ..Default::default()
    };

    let engine = EtlEngine::new(CodepointPipeline::new(FileSink::new(&output), settings)?);
    let err = engine.run().await.unwrap_err();

    assert!(matches!(err, FetchError::HttpError(_)));
    assert!(!output.exists());
    Ok(())
}

mod binary {
    use super::*;
    use std::process::Command;

    fn xid_fetch() -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_xid-fetch"));
        cmd.env_remove("RUST_LOG");
        cmd
    }

    #[test]
    fn test_prints_single_line_to_stdout() {
        let server = MockServer::start();
        let list_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/list-unicodeset.jsp")
                .query_param("a", "[:XID_Start:]")
                .query_param("g", "")
                .query_param("i", "");
            then.status(200).body(XID_START_PAGE);
        });

        let output = xid_fetch()
            .args(["--endpoint", &server.url("/list-unicodeset.jsp")])
            .output()
            .unwrap();

        list_mock.assert();
        assert!(output.status.success());
        assert_eq!(
            String::from_utf8(output.stdout).unwrap(),
            format!("{}\n", EXPECTED_LINE)
        );
    }

    #[test]
    fn test_no_matches_prints_empty_line() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/list-unicodeset.jsp");
            then.status(200).body("<html>Invalid UnicodeSet: U+</html>");
        });

        let output = xid_fetch()
            .args(["--endpoint", &server.url("/list-unicodeset.jsp")])
            .output()
            .unwrap();

        assert!(output.status.success());
        assert_eq!(String::from_utf8(output.stdout).unwrap(), "\n");
    }

    #[test]
    fn test_network_failure_exits_non_zero() {
        let output = xid_fetch()
            .args(["--endpoint", "http://127.0.0.1:1/list-unicodeset.jsp"])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert!(!output.stderr.is_empty());
    }

    #[test]
    fn test_invalid_endpoint_exits_with_config_code() {
        let output = xid_fetch()
            .args(["--endpoint", "ftp://util.unicode.org/list"])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(2));
        assert!(output.stdout.is_empty());
    }
}
