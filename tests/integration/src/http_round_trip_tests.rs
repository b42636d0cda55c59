//! Pull and push through the signed HTTP client against a scripted local
//! server.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use aav_appsync::{AppSyncClient, ClientConfig, Credentials};
use aav_core::Synchronizer;
use aav_fs::ResolverFile;
use aav_test_utils::{ScriptedPrompter, TestResolvers};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

const API: &str = "http-api";

/// One request as seen by the server.
#[derive(Debug)]
struct Seen {
    request_line: String,
    authorized: bool,
    body: String,
}

/// Answer one connection per scripted response, in order.
fn scripted_server(responses: Vec<(u16, Value)>) -> (String, mpsc::Receiver<Seen>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for (status, body) in responses {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();

            let mut length = 0;
            let mut authorized = false;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                let (name, value) = line.split_once(':').unwrap();
                if name.eq_ignore_ascii_case("content-length") {
                    length = value.trim().parse().unwrap();
                }
                if name.eq_ignore_ascii_case("authorization") {
                    authorized = value.trim().starts_with("AWS4-HMAC-SHA256 ");
                }
            }
            let mut request_body = vec![0; length];
            reader.read_exact(&mut request_body).unwrap();

            let payload = body.to_string();
            let mut stream = stream;
            write!(
                stream,
                "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{payload}",
                payload.len()
            )
            .unwrap();
            stream.flush().unwrap();

            tx.send(Seen {
                request_line: request_line.trim_end().to_string(),
                authorized,
                body: String::from_utf8(request_body).unwrap(),
            })
            .unwrap();
        }
    });

    (format!("http://{addr}"), rx)
}

fn client(endpoint: &str) -> AppSyncClient {
    let config = ClientConfig::new(API, "us-east-1", Credentials::new("AKIDEXAMPLE", "secret"))
        .with_endpoint(endpoint);
    AppSyncClient::new(config).unwrap()
}

fn get_user(request: &str) -> Value {
    json!({
        "typeName": "Query",
        "fieldName": "getUser",
        "dataSourceName": "UsersTable",
        "requestMappingTemplate": request,
        "responseMappingTemplate": "$util.toJson($ctx.result)",
        "resolverArn": "arn:aws:appsync:us-east-1:123456789012:apis/http-api/types/Query/resolvers/getUser",
        "kind": "UNIT"
    })
}

#[test]
fn pull_then_push_over_http() {
    let (endpoint, seen) = scripted_server(vec![
        (200, json!({ "resolvers": [get_user("v1"), { "typeName": "Query", "fieldName": "ping" }] })),
        (200, json!({ "dataSources": [{ "name": "UsersTable", "type": "AMAZON_DYNAMODB" }] })),
        (200, json!({ "resolver": get_user("v2") })),
    ]);
    let tree = TestResolvers::new();
    let sync = Synchronizer::new(tree.config(API), client(&endpoint), ScriptedPrompter::new())
        .unwrap();

    let pulled = sync.pull(true).unwrap();
    assert_eq!(pulled.written, vec!["Query.getUser"]);
    assert_eq!(pulled.skipped, vec!["Query.ping"]);
    tree.assert_file_eq("Query/getUser/request.vm", "v1");
    let meta: Value = serde_json::from_str(&tree.read("Query/getUser/meta.json")).unwrap();
    assert_eq!(meta["resolverArn"], get_user("v1")["resolverArn"]);

    tree.write(ResolverFile::RequestTemplate, "Query", "getUser", "v2");
    let pushed = sync.push().unwrap();
    assert_eq!(pushed.updated, vec!["Query.getUser"]);
    assert_eq!(
        tree.read_meta("Query", "getUser").request_template(),
        Some("v2")
    );

    let seen: Vec<Seen> = seen.iter().take(3).collect();
    assert!(seen.iter().all(|s| s.authorized));
    assert_eq!(
        seen.iter().map(|s| s.request_line.as_str()).collect::<Vec<_>>(),
        vec![
            "GET /v1/apis/http-api/types/Query/resolvers HTTP/1.1",
            "GET /v1/apis/http-api/datasources HTTP/1.1",
            "POST /v1/apis/http-api/types/Query/resolvers/getUser HTTP/1.1",
        ]
    );
    let update: Value = serde_json::from_str(&seen[2].body).unwrap();
    assert_eq!(update["dataSourceName"], "UsersTable");
    assert_eq!(update["requestMappingTemplate"], "v2");
}

#[test]
fn remote_rejection_is_recorded_per_resolver() {
    let (endpoint, _seen) = scripted_server(vec![
        (200, json!({ "dataSources": [{ "name": "UsersTable" }] })),
        (400, json!({ "message": "Invalid mapping template" })),
    ]);
    let tree = TestResolvers::new();
    tree.write(ResolverFile::RequestTemplate, "Query", "getUser", "#if(");
    let prompter = ScriptedPrompter::new().select(Some(0));
    let sync = Synchronizer::new(tree.config(API), client(&endpoint), &prompter).unwrap();

    let report = sync.push().unwrap();

    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].resolver, "Query.getUser");
    assert!(report.failed[0].message.contains("Invalid mapping template"));
    tree.assert_file_not_exists("Query/getUser/meta.json");
}
