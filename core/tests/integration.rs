//! Fetch, report and export against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `fetch` over real
//! HTTP through a ureq-backed `Transport`. Validates that request building
//! and response parsing agree with the server's schema end-to-end.

use std::collections::BTreeMap;

use todo_report_core::{
    fetch, write_export, write_report, ApiError, ExportRecord, HttpRequest, HttpResponse,
    Progress, TodoClient, Transport,
};

/// Executes requests with ureq.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.agent.get(&req.url);
        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }
        let mut response = builder.call().map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();
        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

fn start_mock_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn fetch_report_export_lifecycle() {
    let base = start_mock_server();
    let client = TodoClient::new(&base);
    let transport = UreqTransport::new();

    // Step 1: fetch employee 1 and their todos.
    let (employee, todos) = fetch(&transport, &client, 1).unwrap();
    assert_eq!(employee.id, 1);
    assert_eq!(employee.name, "Leanne Graham");
    assert_eq!(todos.len(), 6);
    assert!(todos.iter().all(|t| t.user_id == 1));

    // Step 2: summary lists the two completed titles in order.
    let mut out = Vec::new();
    write_report(&mut out, &employee.name, &todos).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Employee Leanne Graham is done with tasks(2/6):\n\tet porro tempora\n\tquo adipisci enim quam ut ab\n"
    );

    // Step 3: export, then re-derive the done count from the file.
    let dir = tempfile::tempdir().unwrap();
    let path = write_export(dir.path(), employee.id, &todos).unwrap();
    let first = std::fs::read(&path).unwrap();
    let parsed: BTreeMap<String, Vec<ExportRecord>> = serde_json::from_slice(&first).unwrap();
    let records = &parsed["1"];
    assert_eq!(records.len(), todos.len());
    let done = records.iter().filter(|r| r.completed).count();
    assert_eq!(done, Progress::from_items(&todos).done_count());

    // Step 4: exporting again yields identical bytes.
    write_export(dir.path(), employee.id, &todos).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), first);

    // Step 5: an employee without todos.
    let (employee, todos) = fetch(&transport, &client, 3).unwrap();
    assert_eq!(employee.name, "Clementine Bauch");
    assert!(todos.is_empty());

    // Step 6: unknown employee is NotFound.
    let err = fetch(&transport, &client, 999).unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));
}

#[test]
fn unreachable_server_is_a_transport_error() {
    // Bind then drop to get a port with nothing listening.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = TodoClient::new(&format!("http://127.0.0.1:{port}"));

    let err = fetch(&UreqTransport::new(), &client, 1).unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
