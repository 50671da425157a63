use std::io;
use std::sync::Arc;

use ntex::web;
use ntex::web::HttpRequest;
use ntex_files::NamedFile;
use spdlog::{info, warn};

use crate::config::Config;
use crate::content::document_source::DirectorySource;
use crate::content::loader::ContentLoader;
use crate::navigation::{Location, NavState};
use crate::post_store::PostStore;
use crate::projects::ProjectCatalog;
use crate::query_string::QueryString;
use crate::view::blog_renderer::BlogQuery;
use crate::view::{NavBar, Views};

pub struct AppState {
    pub config: Config,
    pub store: PostStore,
    pub catalog: ProjectCatalog,
    pub views: Views,
}

#[derive(Debug, PartialEq)]
pub enum PageResult {
    Found(String),
    NotFound(String),
}

impl PageResult {
    fn into_response(self) -> web::HttpResponse {
        match self {
            PageResult::Found(body) => web::HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(body),
            PageResult::NotFound(body) => web::HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(body),
        }
    }
}

/// Loads posts, projects and templates once. Bad posts are logged and left
/// out, anything else that fails stops the startup.
pub fn load_state(config: Config) -> io::Result<AppState> {
    let source = DirectorySource::new(config.paths.posts_dir.clone());
    let report = ContentLoader::load(&source)?;
    for error in report.errors.iter() {
        warn!("Post not published: {}", error);
    }
    let store = PostStore::new(report.posts);
    for post in store.all() {
        info!("Post: {}", post.slug);
    }

    let catalog = ProjectCatalog::read(&config.paths.projects_file)?;
    info!("Projects: {}", catalog.all().len());

    let views = Views::load(&config.paths.template_dir)?;

    Ok(AppState {
        config,
        store,
        catalog,
        views,
    })
}

fn nav_bar<'a>(state: &'a AppState, path: &str) -> NavBar<'a> {
    // The fragment never reaches the server
    let location = Location::new(path, None);
    NavBar::new(&state.config.site, &NavState::resolve(&location))
}

fn not_found(state: &AppState, path: &str, message: &str) -> PageResult {
    PageResult::NotFound(state.views.not_found.render(nav_bar(state, path), message))
}

pub fn home_page(state: &AppState, path: &str) -> PageResult {
    let latest = state.store.latest(state.config.defaults.preview_count());
    PageResult::Found(state.views.home.render(nav_bar(state, path), state.catalog.all(), latest))
}

pub fn project_page(state: &AppState, project_id: &str) -> PageResult {
    let path = format!("/projects/{}", project_id);
    match state.catalog.get(project_id) {
        Some(project) => PageResult::Found(state.views.project.render(nav_bar(state, &path), project)),
        None => not_found(state, &path, "Project not found"),
    }
}

pub fn blog_page(state: &AppState, query: &QueryString) -> PageResult {
    let blog_query = BlogQuery {
        year: query.year(),
        page: query.page(),
        page_size: state.config.defaults.page_size,
    };
    PageResult::Found(state.views.blog.render(nav_bar(state, "/blog"), &state.store, &blog_query))
}

pub fn post_page(state: &AppState, slug: &str) -> io::Result<PageResult> {
    let path = format!("/blog/{}", slug);
    match state.store.by_slug(slug) {
        Some(post) => Ok(PageResult::Found(state.views.post.render(nav_bar(state, &path), post)?)),
        None => Ok(not_found(state, &path, "Post not found")),
    }
}

#[web::get("/")]
async fn view_home(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    home_page(&state, "/").into_response()
}

#[web::get("/skills")]
async fn view_skills(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    home_page(&state, "/skills").into_response()
}

#[web::get("/projects")]
async fn view_projects(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    home_page(&state, "/projects").into_response()
}

#[web::get("/projects/{project_id}")]
async fn view_project(project_id: web::types::Path<String>, state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    project_page(&state, &project_id.into_inner()).into_response()
}

#[web::get("/blog")]
async fn list_posts(req: HttpRequest, state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let query = QueryString::from_uri_query(req.uri().query());
    blog_page(&state, &query).into_response()
}

#[web::get("/blog/{slug}")]
async fn view_post(slug: web::types::Path<String>, state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let slug = slug.into_inner();
    match post_page(&state, &slug) {
        Ok(page) => page.into_response(),
        Err(e) => {
            warn!("Error rendering post {}: {}", slug, e);
            web::HttpResponse::InternalServerError()
                .body(format!("Error loading post {}: {}", slug, e))
        }
    }
}

#[web::get("/public/{file_name}")]
async fn public_files(path: web::types::Path<String>, state: web::types::State<Arc<AppState>>) -> Result<NamedFile, web::Error> {
    if path.contains("..") {
        return Err(web::error::ErrorUnauthorized("Access forbidden").into());
    }

    let file_path = state.config.paths.public_dir.join(path.into_inner());
    Ok(NamedFile::open(file_path)?)
}

async fn unknown_route(req: HttpRequest, state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    not_found(&state, req.path(), "Page not found").into_response()
}

pub async fn server_run(config: Config) -> io::Result<()> {
    let bind_addr = config.server.address.clone();
    let bind_port = config.server.port;
    let app_state = Arc::new(load_state(config)?);

    web::HttpServer::new(move || {
        web::App::new()
            .state(app_state.clone())
            .service(view_home)
            .service(view_skills)
            .service(view_projects)
            .service(view_project)
            .service(list_posts)
            .service(view_post)
            .service(public_files)
            .default_service(web::route().to(unknown_route))
    })
        .bind((bind_addr, bind_port))?
        .run()
        .await
}
