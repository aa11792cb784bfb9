use app_core::feed;
use web_sys as web;

/// Fill the side widgets from the mocked feed payloads.
pub fn render_widgets(document: &web::Document) {
    let agents = feed::agent_statuses().into_iter().map(|a| {
        let state = match a.status {
            feed::AgentState::Running => format!("running (pid {})", a.pid),
            feed::AgentState::Stopped => "stopped".to_string(),
        };
        format!("{}: {state}", a.name)
    });
    render_list(document, "agent-status", agents);

    let messages = feed::conversation()
        .into_iter()
        .map(|m| format!("{}: {}", m.author, m.text));
    render_list(document, "conversation-log", messages);
}

fn render_list(
    document: &web::Document,
    element_id: &str,
    items: impl Iterator<Item = String>,
) {
    let Some(list) = document.get_element_by_id(element_id) else {
        return;
    };
    list.set_inner_html("");
    for item in items {
        if let Ok(li) = document.create_element("li") {
            li.set_text_content(Some(&item));
            let _ = list.append_child(&li);
        }
    }
}
