use depmap_core::{DeclId, InMemorySemanticModel, Receiver};

/// Declarations of a small HTTP service plus two library dependencies
pub struct ServiceFixture {
    pub model: InMemorySemanticModel,
    pub main: DeclId,
    pub new_server: DeclId,
    pub server: DeclId,
    pub start: DeclId,
    pub handle: DeclId,
    pub config: DeclId,
    pub load_config: DeclId,
    pub version: DeclId,
    pub println: DeclId,
    pub listen: DeclId,
}

pub const APP: &str = "example.com/svc";
pub const APP_SERVER: &str = "example.com/svc/server";

/// ```text
/// main ──► NewServer ──► Server ◄── (*Server).Start ──► Server.handle
///   │                       ▲              │
///   └──► LoadConfig ──► Config ◄───────────┘
///   (fmt.Println, net.Listen are external)
/// version: isolated
/// ```
pub fn service_fixture() -> ServiceFixture {
    let mut model = InMemorySemanticModel::new();

    let main = model.function(APP, "main", "cmd/svc/main.go", 8);
    let load_config = model.function(APP, "LoadConfig", "config.go", 12);
    let config = model.type_decl(APP, "Config", "config.go", 5);
    let version = model.function(APP, "version", "version.go", 3);

    let server = model.type_decl(APP_SERVER, "Server", "server/server.go", 10);
    let new_server = model.function(APP_SERVER, "NewServer", "server/server.go", 15);
    let start = model.method(
        APP_SERVER,
        Receiver::by_reference("Server"),
        "Start",
        "server/server.go",
        22,
    );
    let handle = model.method(
        APP_SERVER,
        Receiver::by_value("Server"),
        "handle",
        "server/handler.go",
        4,
    );

    let println = model.external_function("fmt", "Println");
    let listen = model.external_function("net", "Listen");

    model.add_reference(main, load_config);
    model.add_reference(main, new_server);
    model.add_reference(main, println);
    model.add_reference(main, load_config);
    model.add_unresolved(main, "err");

    model.add_reference(load_config, config);
    model.add_reference(load_config, config);

    model.add_reference(new_server, server);
    model.add_reference(new_server, new_server);

    model.add_reference(start, server);
    model.add_reference(start, handle);
    model.add_reference(start, config);
    model.add_reference(start, listen);

    model.add_reference(handle, server);

    ServiceFixture {
        model,
        main,
        new_server,
        server,
        start,
        handle,
        config,
        load_config,
        version,
        println,
        listen,
    }
}

pub fn id(scope: &str, name: &str) -> String {
    format!("{}::{}", scope, name)
}
