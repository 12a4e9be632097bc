//! Integration tests for the MCP server
//!
//! Drive the server through `serve` with a file-backed catalog, the way an
//! MCP client talks to the binary over stdio.

use orientador_catalog::{Catalog, CatalogConfig};
use orientador_mcp::McpServer;
use orientador_tools::ToolRegistry;
use serde_json::{json, Value};
use std::io::Write;

const GUIDE: &str = "\
Guía de universidades 2024
Universidad: Universidad Tecnológica Nacional Carrera: Ingeniería en Sistemas
Universidad: Universidad de Buenos Aires
Carrera: Medicina
Carrera: Abogacía
";

fn server_for(text: &str) -> (McpServer, tempfile::NamedTempFile) {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    let catalog = Catalog::from_path(file.path(), CatalogConfig::default());
    (McpServer::new(ToolRegistry::new(catalog)), file)
}

fn exchange(server: &mut McpServer, requests: &[Value]) -> Vec<Value> {
    let input: String = requests
        .iter()
        .map(|r| serde_json::to_string(r).unwrap() + "\n")
        .collect();
    let mut output = Vec::new();
    server.serve(input.as_bytes(), &mut output).unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn tool_call(id: u64, name: &str, arguments: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": {"name": name, "arguments": arguments}
    })
}

fn text_of(response: &Value) -> &str {
    response["result"]["content"][0]["text"].as_str().unwrap()
}

#[test]
fn test_client_session() {
    let (mut server, _file) = server_for(GUIDE);
    let responses = exchange(
        &mut server,
        &[
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
            tool_call(
                3,
                "buscarPorUniversidad",
                json!({"universidad": "Universidad Tecnológica Nacional"}),
            ),
        ],
    );

    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0]["id"], 1);

    let names: Vec<&str> = responses[1]["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"compararCarreras"));
    assert!(names.contains(&"listarUniversidadesDeCarrera"));

    assert_eq!(
        text_of(&responses[2]),
        "Carreras en Universidad Tecnológica Nacional:\n- Ingeniería en Sistemas"
    );
    assert_eq!(responses[2]["result"]["isError"], false);
}

#[test]
fn test_lookup_miss_is_text_not_error() {
    let (mut server, _file) = server_for(GUIDE);
    let responses = exchange(
        &mut server,
        &[tool_call(1, "buscarPorCarrera", json!({"carrera": "Astronomía"}))],
    );
    assert_eq!(
        text_of(&responses[0]),
        "No se encontraron universidades para la carrera: Astronomía"
    );
}

#[test]
fn test_bad_calls_are_json_rpc_errors() {
    let (mut server, _file) = server_for(GUIDE);
    let responses = exchange(
        &mut server,
        &[
            tool_call(1, "borrarUniversidad", json!({})),
            tool_call(2, "buscarPorCarrera", json!({"universidad": "UBA"})),
        ],
    );

    assert_eq!(responses[0]["error"]["code"], -32601);
    assert_eq!(responses[1]["error"]["code"], -32602);
    assert_eq!(responses[1]["id"], 2);
}

#[test]
fn test_missing_document_serves_empty_catalog() {
    let catalog = Catalog::from_path("/nonexistent/universidades.pdf", CatalogConfig::default());
    let mut server = McpServer::new(ToolRegistry::new(catalog));
    let responses = exchange(&mut server, &[tool_call(1, "listarUniversidades", json!({}))]);
    assert_eq!(text_of(&responses[0]), "No se encontraron universidades.");
}

#[test]
fn test_hostile_detail_query() {
    let (mut server, _file) = server_for(GUIDE);
    let responses = exchange(
        &mut server,
        &[tool_call(1, "detalleCarrera", json!({"carrera": "(.*)+["}))],
    );
    assert_eq!(
        text_of(&responses[0]),
        "No se encontró información sobre la carrera: (.*)+["
    );
}
