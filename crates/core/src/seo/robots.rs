/// Render robots directives allowing everything and pointing at the sitemap.
pub fn render_robots(site_url: &str) -> String {
    let site = site_url.trim_end_matches('/');
    format!("User-agent: *\nAllow: /\n\nSitemap: {site}/sitemap.xml\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn references_sitemap_location() {
        let robots = render_robots("https://recipes.example.com/");
        assert!(robots.starts_with("User-agent: *\nAllow: /\n"));
        assert!(robots.ends_with("Sitemap: https://recipes.example.com/sitemap.xml\n"));
    }
}
