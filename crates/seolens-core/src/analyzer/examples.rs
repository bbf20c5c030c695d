//! Template-based example text for titles, descriptions and H1s

use super::content::{ContentContext, ContentType};

/// Number of examples every suggestion carries.
pub const EXAMPLE_COUNT: usize = 3;

/// The page element an example is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Title,
    MetaDescription,
    H1,
    /// Anything without its own templates; gets filler examples only
    Other,
}

/// Generate exactly three example texts for `element_type`.
///
/// The phrasing depends on the content type and the page's top keyword.
/// Suggestions identical to `current_value` are dropped and the list is
/// padded with a generic phrase.
pub fn generate_contextual_examples(
    context: &ContentContext,
    element_type: ElementType,
    current_value: Option<&str>,
) -> Vec<String> {
    let keyword = context.keywords.first().map(String::as_str);

    let mut examples = match element_type {
        ElementType::Title => title_examples(context.content_type, keyword),
        ElementType::MetaDescription => description_examples(context.content_type, keyword),
        ElementType::H1 => h1_examples(context.content_type, keyword),
        ElementType::Other => Vec::new(),
    };

    if let Some(current) = current_value.map(str::trim).filter(|c| !c.is_empty()) {
        examples.retain(|example| !example.eq_ignore_ascii_case(current));
    }

    let filler = format!(
        "Professional solution for {}",
        keyword.unwrap_or("your business")
    );
    while examples.len() < EXAMPLE_COUNT {
        examples.push(filler.clone());
    }
    examples.truncate(EXAMPLE_COUNT);
    examples
}

/// Topic word used when the page yielded no keywords.
fn default_topic(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::ECommerce => "products",
        ContentType::Blog => "this topic",
        ContentType::Service => "business",
        ContentType::Portfolio | ContentType::General => "solutions",
    }
}

fn title_examples(content_type: ContentType, keyword: Option<&str>) -> Vec<String> {
    let topic = title_case(keyword.unwrap_or(default_topic(content_type)));
    match content_type {
        ContentType::ECommerce => vec![
            format!("Buy {topic} Online | Premium Quality | Free Shipping"),
            format!("{topic} Products | Best Prices & Fast Delivery"),
            format!("Shop {topic} | Trusted Store | Secure Checkout"),
        ],
        ContentType::Blog => vec![
            format!("Expert Guide to {topic} | Tips & Insights"),
            format!("{topic} Blog | Latest News & Tutorials"),
            format!("Master {topic} | Comprehensive Resources"),
        ],
        ContentType::Service => vec![
            format!("Professional {topic} Services | Expert Solutions"),
            format!("{topic} Consulting | Transform Your Business"),
            format!("Expert {topic} Solutions | Get Results Today"),
        ],
        ContentType::Portfolio | ContentType::General => {
            let or = |fallback: &str| keyword.map_or_else(|| fallback.to_string(), title_case);
            vec![
                format!("{} Services | Quality Solutions", or("Professional")),
                format!("Expert {} | Trusted Provider", or("Business")),
                format!("{} Solutions | Industry Leader", or("Your")),
            ]
        }
    }
}

fn description_examples(content_type: ContentType, keyword: Option<&str>) -> Vec<String> {
    let topic = keyword.unwrap_or(default_topic(content_type));
    match content_type {
        ContentType::ECommerce => vec![
            format!(
                "Discover premium {topic} products at unbeatable prices. Fast shipping, secure checkout, and 100% satisfaction guaranteed. Shop now and save!"
            ),
            format!(
                "Your trusted source for quality {topic}. Browse our extensive collection, enjoy exclusive deals, and experience exceptional customer service."
            ),
            format!(
                "Find the perfect {topic} for your needs. Premium quality, competitive prices, and expert support. Order today with free shipping!"
            ),
        ],
        ContentType::Blog => vec![
            format!(
                "Explore expert insights on {topic}. Get tips, tutorials, and latest trends from industry professionals. Subscribe for weekly updates!"
            ),
            format!(
                "Your go-to resource for {topic} knowledge. In-depth articles, how-to guides, and practical advice. Start learning today!"
            ),
            format!(
                "Master {topic} with our comprehensive guides and expert analysis. Join thousands of readers improving their skills daily."
            ),
        ],
        ContentType::Service => vec![
            format!(
                "Professional {topic} services for growing businesses. Expert team, proven results, and personalized solutions. Get your free consultation today!"
            ),
            format!(
                "Transform your business with our {topic} expertise. Tailored solutions, industry experience, and dedicated support. Contact us now!"
            ),
            format!(
                "Leading {topic} provider with 10+ years experience. Custom solutions, measurable results, and exceptional service. Start your project today!"
            ),
        ],
        ContentType::Portfolio | ContentType::General => vec![
            format!(
                "Discover professional solutions for {}. Expert guidance, quality service, and proven results. Learn more today!",
                keyword.unwrap_or("your needs")
            ),
            format!(
                "Your trusted partner for {}. Comprehensive services, experienced team, and customer-first approach.",
                keyword.unwrap_or("business success")
            ),
            format!(
                "Excellence in {}. Industry expertise, innovative solutions, and commitment to your success.",
                keyword.unwrap_or("service delivery")
            ),
        ],
    }
}

fn h1_examples(content_type: ContentType, keyword: Option<&str>) -> Vec<String> {
    let topic = title_case(keyword.unwrap_or(default_topic(content_type)));
    match content_type {
        ContentType::ECommerce => vec![
            format!("Premium {topic} Products for Every Need"),
            format!("Discover Our Collection of Quality {topic}"),
            format!("Shop {topic} | Best Selection & Prices"),
        ],
        ContentType::Blog => vec![
            format!("Everything You Need to Know About {topic}"),
            format!("The Ultimate Guide to {topic}"),
            format!("Expert Insights on {topic} | Latest Updates"),
        ],
        ContentType::Service => vec![
            format!("Professional {topic} Services That Deliver Results"),
            format!("Transform Your Business with Expert {topic} Solutions"),
            format!("Leading {topic} Provider | Trusted by Businesses"),
        ],
        ContentType::Portfolio | ContentType::General => {
            let or = |fallback: &str| keyword.map_or_else(|| fallback.to_string(), title_case);
            vec![
                format!("Professional {} for Modern Businesses", or("Solutions")),
                format!("Expert {} | Quality You Can Trust", or("Services")),
                format!("{} Partner for Success", or("Your")),
            ]
        }
    }
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
///
/// `"seo2go tools"` becomes `"Seo2Go Tools"`.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(ch);
            previous_is_letter = false;
        }
    }
    result
}
