use std::time::Duration;

use lsp_server::{Connection, Message, Notification, Request};
use serde_json::json;
use synvis_server::Server;

const TIMEOUT: Duration = Duration::from_secs(10);

struct Client {
    connection: Connection,
    next_id: i32,
}

impl Client {
    /// Spawns a server over an in-memory connection and runs the
    /// initialize handshake against it.
    fn start() -> (Self, std::thread::JoinHandle<()>) {
        let (server_side, client_side) = Connection::memory();
        let handle = std::thread::spawn(move || {
            Server::new(server_side, None).unwrap().run().unwrap();
        });

        let mut client = Self { connection: client_side, next_id: 0 };
        let capabilities = client.request("initialize", json!({"capabilities": {}}));
        assert!(capabilities["capabilities"]["textDocumentSync"].is_object());
        client.notify("initialized", json!({}));

        (client, handle)
    }

    fn request(&mut self, method: &str, params: serde_json::Value) -> serde_json::Value {
        self.next_id += 1;
        let request = Request::new(self.next_id.into(), method.to_owned(), params);
        self.connection.sender.send(request.into()).unwrap();

        match self.recv() {
            Message::Response(response) => {
                assert!(response.error.is_none(), "request failed: {:?}", response.error);
                response.result.unwrap_or(serde_json::Value::Null)
            }
            message => panic!("expected a response, got {message:?}"),
        }
    }

    fn notify(&self, method: &str, params: serde_json::Value) {
        let notification = Notification::new(method.to_owned(), params);
        self.connection.sender.send(notification.into()).unwrap();
    }

    fn recv(&self) -> Message {
        self.connection.receiver.recv_timeout(TIMEOUT).unwrap()
    }

    fn expect_notification(&self, method: &str) {
        match self.recv() {
            Message::Notification(notification) => assert_eq!(notification.method, method),
            message => panic!("expected `{method}`, got {message:?}"),
        }
    }

    fn open(&self, uri: &str, text: &str) {
        self.notify(
            "textDocument/didOpen",
            json!({
                "textDocument": {
                    "uri": uri,
                    "languageId": "csharp",
                    "version": 0,
                    "text": text,
                }
            }),
        );
    }

    fn shutdown(mut self, handle: std::thread::JoinHandle<()>) {
        let _ = self.request("shutdown", serde_json::Value::Null);
        self.notify("exit", serde_json::Value::Null);
        handle.join().unwrap();
    }
}

#[test]
fn serves_whole_trees_and_subtrees() {
    let (mut client, handle) = Client::start();
    client.open("file:///demo.cs", "class C { void M() {} }");

    let tree = client.request("syntaxVisualizer/getSyntaxTree", serde_json::Value::Null);
    assert_eq!(tree["id"], 0);
    assert_eq!(tree["kind"], "CompilationUnit");
    assert_eq!(tree["typeName"], "CompilationUnitSyntax");
    assert_eq!(tree["children"][0]["kind"], "ClassDeclaration");
    assert_eq!(tree["span"]["startLine"], 0);

    // Empty params mean the whole tree too.
    let again = client.request("syntaxVisualizer/getSyntaxTree", json!({}));
    assert_eq!(again, tree);

    let subtree = client.request("syntaxVisualizer/getSyntaxTree", json!({"id": "5"}));
    assert_eq!(subtree["kind"], "MethodDeclaration");

    let missing = client.request("syntaxVisualizer/getSyntaxTree", json!({"id": "999"}));
    assert_eq!(missing, serde_json::Value::Null);

    // A malformed id names no node either; it must not fall back to the
    // whole tree.
    let malformed = client.request("syntaxVisualizer/getSyntaxTree", json!({"id": "not-a-number"}));
    assert_eq!(malformed, serde_json::Value::Null);

    client.shutdown(handle);
}

#[test]
fn change_and_save_invalidate_the_served_tree() {
    let (mut client, handle) = Client::start();
    let uri = "file:///demo.cs";
    client.open(uri, "class C { void M() {} }");
    let _ = client.request("syntaxVisualizer/getSyntaxTree", serde_json::Value::Null);

    client.notify(
        "textDocument/didChange",
        json!({
            "textDocument": {"uri": uri, "version": 1},
            "contentChanges": [{"text": "class C {}"}],
        }),
    );
    client.expect_notification("syntaxVisualizer/invalidTree2");

    // The tree is rebuilt on save, not on change.
    let unchanged = client.request("syntaxVisualizer/getSyntaxTree", json!({"id": "5"}));
    assert_eq!(unchanged["kind"], "MethodDeclaration");

    client.notify(
        "textDocument/didSave",
        json!({"textDocument": {"uri": uri}, "text": "class C {}"}),
    );
    client.expect_notification("syntaxVisualizer/invalidTree");

    let tree = client.request("syntaxVisualizer/getSyntaxTree", serde_json::Value::Null);
    let class_decl = &tree["children"][0];
    assert_eq!(class_decl["kind"], "ClassDeclaration");
    let kinds: Vec<_> = class_decl["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|child| child["kind"].as_str().unwrap())
        .collect();
    assert!(!kinds.contains(&"MethodDeclaration"));

    client.shutdown(handle);
}

#[test]
fn closing_the_active_document_drops_the_tree() {
    let (mut client, handle) = Client::start();
    let uri = "file:///demo.cs";
    client.open(uri, "int x = 1;");

    client.notify("textDocument/didClose", json!({"textDocument": {"uri": uri}}));

    let tree = client.request("syntaxVisualizer/getSyntaxTree", serde_json::Value::Null);
    assert_eq!(tree, serde_json::Value::Null);

    client.shutdown(handle);
}
