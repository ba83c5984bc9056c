#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;

use tiny_http::{Method, Response, Server, StatusCode};

use obsidian_forge_adapters::{ForgeClientConfig, HttpRemoteClient};

pub const ADDRESS: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub body: String,
}

impl Recorded {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is json")
    }
}

pub type RequestLog = Arc<Mutex<Vec<Recorded>>>;

/// Serve up to 16 requests on an ephemeral port, answering each with
/// `route(method, path)` and recording what was received.
pub fn spawn_mock_server<F>(route: F) -> (HttpRemoteClient, RequestLog)
where
    F: Fn(&Method, &str) -> (u16, String) + Send + 'static,
{
    let server = Server::http("127.0.0.1:0").expect("start server");
    let base_url = format!("http://{}", server.server_addr());
    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&log);

    thread::spawn(move || {
        for _ in 0..16 {
            let mut req = match server.recv() {
                Ok(r) => r,
                Err(_) => break,
            };
            let mut body = String::new();
            let _ = req.as_reader().read_to_string(&mut body);
            let method = req.method().clone();
            let path = req.url().to_owned();
            let (code, payload) = route(&method, &path);
            if let Ok(mut g) = seen.lock() {
                g.push(Recorded { method, path, body });
            }
            let response = Response::from_string(payload).with_status_code(StatusCode(code));
            let _ = req.respond(response);
        }
    });

    let client = HttpRemoteClient::new(ForgeClientConfig::with_backend_url(base_url));
    (client, log)
}

pub fn recorded(log: &RequestLog) -> Vec<Recorded> {
    log.lock().expect("request log").clone()
}
