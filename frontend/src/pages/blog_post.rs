use web_sys::Element;
use yew::prelude::*;

use crate::catalog::Article;
use crate::view::anchor_target;

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub article: &'static Article,
    /// Leaves the article, optionally naming the section to land on.
    pub on_back: Callback<Option<String>>,
}

#[function_component(BlogPost)]
pub fn blog_post(props: &BlogPostProps) -> Html {
    let BlogPostProps { article, on_back } = props;

    let back = {
        let on_back = on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(None))
    };

    let book_call = {
        let on_back = on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(Some("#contact".to_string())))
    };

    // In-page links inside the article body lead back home to that section.
    let on_content_click = {
        let on_back = on_back.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(target) = e.target_dyn_into::<Element>() else {
                return;
            };
            let Ok(Some(anchor)) = target.closest("a") else {
                return;
            };
            if let Some(href) = anchor.get_attribute("href") {
                if anchor_target(&href).is_some() {
                    e.prevent_default();
                    on_back.emit(Some(href));
                }
            }
        })
    };

    html! {
        <div class="article-page">
            <button class="article-back" onclick={back}>
                {"← Back to Nexus Growth"}
            </button>
            <header class="article-header">
                <div class="article-category">{article.category}</div>
                <h1>{article.title}</h1>
                <div class="article-meta">
                    <span class="article-author">{article.author}</span>
                    <span>{article.date}</span>
                    <span>{format!("{} min read", article.read_minutes)}</span>
                </div>
            </header>
            <div class="prose-container" onclick={on_content_click}>
                { Html::from_html_unchecked(AttrValue::from(article.content)) }
            </div>
            <div class="article-cta">
                <h4>{"Want these results for your business?"}</h4>
                <p>{"Let's implement these strategies together and scale your growth."}</p>
                <button class="hero-cta" onclick={book_call}>{"Book a Consultation Call"}</button>
            </div>
            <style>
                {r#"
                .article-page {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                }
                .article-back {
                    background: none;
                    border: none;
                    color: #818cf8;
                    font-size: 10px;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    cursor: pointer;
                    margin-bottom: 3rem;
                }
                .article-back:hover {
                    color: #fff;
                }
                .article-category {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: rgba(16, 185, 129, 0.1);
                    border: 1px solid rgba(16, 185, 129, 0.2);
                    color: #34d399;
                    font-size: 10px;
                    font-weight: 700;
                    text-transform: uppercase;
                    margin-bottom: 2rem;
                }
                .article-header h1 {
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                    font-weight: 700;
                    color: #fff;
                    letter-spacing: -0.05em;
                    line-height: 0.95;
                    margin-bottom: 2.5rem;
                }
                .article-meta {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 2rem;
                    font-size: 11px;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: #64748b;
                    padding-bottom: 3rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    margin-bottom: 3rem;
                }
                .article-author {
                    color: #fff;
                }
                .prose-container h2 { font-size: 2rem; font-weight: 800; color: white; margin: 3rem 0 1.5rem; }
                .prose-container h3 { font-size: 1.5rem; font-weight: 700; color: #e2e8f0; margin: 2rem 0 1rem; }
                .prose-container p { font-size: 1.125rem; line-height: 1.8; color: #94a3b8; margin-bottom: 1.5rem; }
                .prose-container blockquote { border-left: 4px solid #6366f1; padding-left: 1.5rem; font-style: italic; color: #cbd5e1; margin: 2.5rem 0; font-size: 1.25rem; }
                .prose-container ol, .prose-container ul { margin-bottom: 2rem; color: #94a3b8; list-style-position: inside; }
                .prose-container li { margin-bottom: 0.75rem; line-height: 1.6; }
                .prose-container strong { color: white; }
                .prose-container a { color: #818cf8; text-decoration: none; font-weight: 700; border-bottom: 1px solid rgba(129, 140, 248, 0.3); }
                .prose-container a:hover { color: white; border-bottom-color: white; }
                .article-cta {
                    margin-top: 8rem;
                    padding: 3rem;
                    border-radius: 3rem;
                    text-align: center;
                    background: linear-gradient(135deg, rgba(99, 102, 241, 0.1), transparent);
                    border: 1px solid rgba(99, 102, 241, 0.2);
                }
                .article-cta h4 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #fff;
                    margin-bottom: 1rem;
                }
                .article-cta p {
                    color: #94a3b8;
                    margin-bottom: 2.5rem;
                }
                .article-cta .hero-cta {
                    padding: 1.25rem 3rem;
                    border-radius: 9999px;
                    border: none;
                    cursor: pointer;
                    background: linear-gradient(135deg, #6366f1, #a855f7);
                    color: #fff;
                    font-size: 0.75rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                "#}
            </style>
        </div>
    }
}
