use blog_server_node::faker::IdScheme;
use blog_server_node::server::{ServerConfig, ServerNode};
use rocket::local::blocking::Client;

pub fn get_server_config(id_scheme: IdScheme, seed_count: usize) -> ServerConfig {
    ServerConfig {
        id_scheme,
        seed_count,
        ..ServerConfig::default()
    }
}

pub fn launch_server_node(id_scheme: IdScheme, seed_count: usize) -> (ServerNode, Client) {
    let _ = env_logger::builder().is_test(true).try_init();
    let node = ServerNode::new(get_server_config(id_scheme, seed_count));
    let client = Client::tracked(node.build()).expect("valid rocket instance");
    (node, client)
}

pub fn launch_empty_server_node() -> (ServerNode, Client) {
    launch_server_node(IdScheme::Opaque, 0)
}
