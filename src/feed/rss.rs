use std::borrow::Cow;

use crate::feed::{Feed, FeedItem};

pub const ITUNES_NAMESPACE: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";

/// Escape the five XML special characters for text nodes and attribute values.
pub fn xml_escape(s: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(s)
}

/// Serialize a feed as an RSS 2.0 document with the iTunes podcast namespace.
///
/// The channel always carries `<itunes:block>yes</itunes:block>` so directories never
/// pick these private feeds up.
pub fn render(feed: &Feed) -> String {
    let items: String = feed.items.iter().map(item_element).collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:itunes="{ns}">
  <channel>
    <itunes:block>yes</itunes:block>
    <title>{title}</title>
    <link>{link}</link>
    <description>{description}</description>
    <itunes:image href="{artwork}"/>
    <image><url>{artwork}</url><title>{title}</title><link>{link}</link></image>
{items}  </channel>
</rss>
"#,
        ns = ITUNES_NAMESPACE,
        title = xml_escape(&feed.title),
        link = xml_escape(feed.link.as_str()),
        description = xml_escape(&feed.description),
        artwork = xml_escape(feed.artwork.as_str()),
        items = items,
    )
}

fn item_element(item: &FeedItem) -> String {
    format!(
        r#"    <item>
      <title>{title}</title>
      <link>{link}</link>
      <enclosure url="{link}" type="{mime}" length="{length}"/>
      <itunes:duration>{duration}</itunes:duration>
      <itunes:image href="{thumbnail}"/>
    </item>
"#,
        title = xml_escape(&item.title),
        link = xml_escape(item.link.as_str()),
        mime = item.mime,
        length = item.length,
        duration = xml_escape(&item.duration),
        thumbnail = xml_escape(item.thumbnail.as_str()),
    )
}
