use yew::prelude::*;

/// Top-level views reachable from the sidebar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Students,
    Faculty,
    Subjects,
    Classes,
    Assignments,
    Marks,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Dashboard,
        Page::Students,
        Page::Faculty,
        Page::Subjects,
        Page::Classes,
        Page::Assignments,
        Page::Marks,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Students => "Students",
            Page::Faculty => "Faculty",
            Page::Subjects => "Subjects",
            Page::Classes => "Classes",
            Page::Assignments => "Faculty Assignments",
            Page::Marks => "Marks",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <nav class="sidebar">
            <div class="sidebar-brand">{"ISE Department"}</div>
            <ul>
                {for Page::ALL.iter().map(|&page| {
                    let class = if page == props.current { "nav-item active" } else { "nav-item" };
                    let onclick = {
                        let on_navigate = props.on_navigate.clone();
                        Callback::from(move |_: MouseEvent| on_navigate.emit(page))
                    };
                    html! {
                        <li class={class} key={page.title()}>
                            <button onclick={onclick}>{page.title()}</button>
                        </li>
                    }
                })}
            </ul>
        </nav>
    }
}
