use rocket::Route;

mod catalog;
mod generate;
mod voting;

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(catalog::routes());
    routes.extend(voting::routes());
    routes.extend(generate::routes());
    routes
}
