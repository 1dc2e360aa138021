//! Sitemap generation: pure derived output over the known content routes.

use chrono::Utc;

use crate::content;

/// Every route the site serves: the static pages plus one detail page per
/// service. HelloFlint has its own page under /packages, not a service page.
pub fn routes() -> Vec<String> {
    let mut routes = vec![
        String::new(),
        "/contact".to_string(),
        "/about".to_string(),
        "/services".to_string(),
        "/packages".to_string(),
    ];
    routes.extend(
        content::SERVICES
            .iter()
            .filter(|s| s.id != "helloflint")
            .map(|s| format!("/services/{}", s.id)),
    );
    routes
}

/// Render the sitemap XML document with every route's `<loc>` prefixed by
/// the public base URL.
pub fn render(base_url: &str) -> String {
    let lastmod = Utc::now().format("%Y-%m-%d");
    let entries = routes()
        .iter()
        .map(|route| {
            format!(
                "    <url>\n        <loc>{base_url}{route}</loc>\n        <lastmod>{lastmod}</lastmod>\n        <changefreq>weekly</changefreq>\n    </url>"
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{entries}\n</urlset>"
    )
}
