use std::convert::TryFrom;
use std::sync::Arc;

use log::{debug, info, warn};
use rocket::http::Status;
use rocket::serde::json::{json, Json, Value};
use rocket::{delete, get, post, put, routes, Build, Rocket, State};

use crate::error::ApiError;
use crate::faker::{BlogFaker, IdScheme};
use crate::model::Blog;
use crate::store::BlogStore;

pub const DEFAULT_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

/// Upper bound on blogs generated by a single create request.
pub const MAX_CREATE_COUNT: usize = 10_000;

#[get("/")]
fn health_check() -> &'static str {
    "Healthy\n"
}

#[get("/stats")]
fn blog_stats(store: &State<Arc<BlogStore>>) -> Json<Value> {
    Json(json!({ "count": store.len() }))
}

#[post("/clear")]
fn clear(store: &State<Arc<BlogStore>>) -> String {
    let removed = store.clear();
    info!("cleared {} blogs", removed);
    String::from("cleared")
}

#[post("/blog?<count>")]
fn create_blog(
    count: i64,
    store: &State<Arc<BlogStore>>,
    faker: &State<Arc<BlogFaker>>,
) -> Result<Json<Vec<Blog>>, ApiError> {
    if count < 0 {
        warn!("rejected create with count {}", count);
        return Err(ApiError::NegativeCount(count));
    }
    let n = usize::try_from(count)
        .ok()
        .filter(|n| *n <= MAX_CREATE_COUNT)
        .ok_or_else(|| {
            warn!("rejected create with count {}", count);
            ApiError::CountTooLarge {
                count,
                max: MAX_CREATE_COUNT,
            }
        })?;
    let blogs = faker.generate(n);
    for (i, blog) in blogs.iter().enumerate() {
        info!(
            "Blog {}: id: {}, title: {}, content: {}",
            i + 1,
            blog.id,
            blog.title,
            blog.content
        );
    }
    store.append(blogs.clone());
    Ok(Json(blogs))
}

#[get("/blog")]
fn list_blogs(store: &State<Arc<BlogStore>>) -> Json<Vec<Blog>> {
    Json(store.list())
}

#[get("/blog/<id>")]
fn get_blog(
    id: &str,
    store: &State<Arc<BlogStore>>,
    faker: &State<Arc<BlogFaker>>,
) -> Result<Json<Blog>, ApiError> {
    let id = faker.id_scheme().canonical_id(id);
    store
        .find_by_id(&id)
        .map(Json)
        .ok_or(ApiError::BlogNotFound(id))
}

#[put("/blog/<id>?<title>&<content>")]
fn update_blog(
    id: &str,
    title: String,
    content: String,
    store: &State<Arc<BlogStore>>,
    faker: &State<Arc<BlogFaker>>,
) -> Result<Json<Blog>, ApiError> {
    let id = faker.id_scheme().canonical_id(id);
    match store.update(&id, &title, &content) {
        Some(blog) => {
            debug!("updated blog {}", id);
            Ok(Json(blog))
        }
        None => Err(ApiError::BlogNotFound(id)),
    }
}

#[delete("/blog/<id>")]
fn delete_blog(
    id: &str,
    store: &State<Arc<BlogStore>>,
    faker: &State<Arc<BlogFaker>>,
) -> Status {
    let id = faker.id_scheme().canonical_id(id);
    match store.remove(&id) {
        Some(_) => debug!("deleted blog {}", id),
        None => debug!("delete of unknown blog {} ignored", id),
    }
    Status::NoContent
}

pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub id_scheme: IdScheme,
    /// Fake blogs inserted before the server starts taking requests.
    pub seed_count: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            address: String::from(DEFAULT_ADDRESS),
            port: DEFAULT_PORT,
            id_scheme: IdScheme::default(),
            seed_count: 0,
        }
    }
}

pub struct ServerNode {
    store: Arc<BlogStore>,
    faker: Arc<BlogFaker>,
    config: ServerConfig,
}

impl ServerNode {
    pub fn new(config: ServerConfig) -> Self {
        let store = Arc::new(BlogStore::new());
        let faker = Arc::new(BlogFaker::new(config.id_scheme));
        if config.seed_count > 0 {
            store.append(faker.generate(config.seed_count));
            info!(
                "seeded store with {} blogs ({:?} ids)",
                config.seed_count,
                faker.id_scheme()
            );
        }
        ServerNode {
            store,
            faker,
            config,
        }
    }

    pub fn store(&self) -> Arc<BlogStore> {
        self.store.clone()
    }

    pub fn build(&self) -> Rocket<Build> {
        let figment = rocket::Config::figment()
            .merge(("address", self.config.address.clone()))
            .merge(("port", self.config.port));
        rocket::build()
            .configure(figment)
            .manage(self.store.clone())
            .manage(self.faker.clone())
            .mount(
                "/",
                routes![
                    health_check,
                    blog_stats,
                    clear,
                    create_blog,
                    list_blogs,
                    get_blog,
                    update_blog,
                    delete_blog,
                ],
            )
    }
}
