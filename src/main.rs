use yew::prelude::*;

use yew_pull_to_refresh::config::PULL_THRESHOLD_PX;
use yew_pull_to_refresh::{PullToRefreshOptions, use_pull_to_refresh};

/// Minimal consumer of the recognizer: a scrollable article list with the
/// pull indicator overlay. The recognizer itself never renders anything;
/// everything visual lives here.
#[function_component(App)]
fn app() -> Html {
    let pull = use_pull_to_refresh(PullToRefreshOptions::default());

    let progress = (pull.pull_distance / PULL_THRESHOLD_PX).min(1.0);
    let indicator_label = if pull.is_refreshing {
        "Refreshing…"
    } else if pull.can_refresh {
        "Release to refresh"
    } else {
        "Pull to refresh"
    };
    let indicator_style = format!(
        "position:fixed; top:12px; left:50%; transform:translateX(-50%); \
         padding:6px 14px; border-radius:16px; background:rgba(22,27,34,0.9); \
         border:1px solid #30363d; font-size:13px; opacity:{:.2}; z-index:10;",
        if pull.is_refreshing { 1.0 } else { progress }
    );
    // Follow the finger while pulling; snap back through the 350ms return
    // transition once released or committed.
    let content_style = if pull.is_pulling && !pull.is_refreshing {
        format!("transform:translateY({:.1}px);", pull.visual_offset)
    } else {
        "transform:translateY(0); transition:transform 350ms ease;".to_string()
    };

    html! {
        <div style="width:100vw; min-height:100vh; background:#0e1116; color:#c9d1d9;">
            <div style={indicator_style}>{ indicator_label }</div>
            <div style={content_style}>
                <div style="padding:16px; font-weight:600; font-size:18px;">{"Timeline"}</div>
                <div data-carousel="" style="display:flex; gap:8px; overflow-x:auto; padding:0 16px 12px 16px;">
                    { for (1..=8).map(|i| html! {
                        <div style="flex:0 0 120px; height:72px; border-radius:8px; background:#161b22; border:1px solid #30363d; display:flex; align-items:center; justify-content:center;">
                            { format!("Card {}", i) }
                        </div>
                    }) }
                </div>
                { for (1..=30).map(|i| html! {
                    <div style="margin:8px 16px; padding:14px; border-radius:8px; background:#161b22; border:1px solid #30363d;">
                        <div style="font-weight:600;">{ format!("Article {}", i) }</div>
                        <div style="font-size:13px; opacity:0.7;">{"Pull down from the top to reload the feed."}</div>
                    </div>
                }) }
            </div>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
