use chrono::NaiveDate;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Change frequency values for sitemap entries.
///
/// See <https://www.sitemaps.org/protocol.html#changefreqdef>.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

/// A single `<url>` in the sitemap. Recomputed on every generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: Option<NaiveDate>,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

impl SitemapEntry {
    pub fn new(loc: impl Into<String>, changefreq: ChangeFreq, priority: f32) -> Self {
        Self {
            loc: loc.into(),
            lastmod: None,
            changefreq,
            priority,
        }
    }

    pub fn with_lastmod(mut self, lastmod: Option<NaiveDate>) -> Self {
        self.lastmod = lastmod;
        self
    }

    fn write_xml(&self, out: &mut String) {
        out.push_str("  <url>\n");
        out.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&self.loc)));
        if let Some(lastmod) = self.lastmod {
            out.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod.format("%Y-%m-%d")));
        }
        out.push_str(&format!("    <changefreq>{}</changefreq>\n", self.changefreq.as_str()));
        out.push_str(&format!("    <priority>{:.1}</priority>\n", self.priority));
        out.push_str("  </url>\n");
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Render a `<urlset>` document with entries in the order given.
pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!("<urlset xmlns=\"{SITEMAP_NS}\">\n"));
    for entry in entries {
        entry.write_xml(&mut xml);
    }
    xml.push_str("</urlset>\n");
    xml
}
