use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

// Minimal page the cursor layer reacts to: links, buttons, tabs and form fields.
#[function_component(HostPage)]
pub fn host_page() -> Html {
    html! {
        <div style="min-height:100vh; background:#0e1116; color:#c9d1d9; font-family:system-ui, sans-serif;">
            <nav style="display:flex; gap:18px; padding:16px 24px; border-bottom:1px solid #30363d;">
                <a href="#about">{"About"}</a>
                <a href="#projects">{"Projects"}</a>
                <a href="#contact">{"Contact"}</a>
            </nav>
            <main style="max-width:720px; margin:0 auto; padding:48px 24px; display:flex; flex-direction:column; gap:48px;">
                <section id="about">
                    <h1 style="margin:0 0 12px 0;">{"Hi, I build things for the web."}</h1>
                    <p style="opacity:0.8;">{"Move the pointer around: it trails, bends toward buttons and bursts when you click."}</p>
                    <div style="display:flex; gap:12px; margin-top:16px;">
                        <button>{"View work"}</button>
                        <div class="interactive" style="padding:6px 12px; border:1px solid #30363d; border-radius:6px;">{"Say hello"}</div>
                    </div>
                </section>
                <ProjectTabs />
                <ContactForm />
            </main>
        </div>
    }
}

const PROJECTS: [(&str, &str); 3] = [
    ("Compiler", "A toy language with a hand-written parser."),
    ("Tracker", "Habit tracker that runs fully offline."),
    ("Shaders", "Generative art experiments on the GPU."),
];

#[function_component(ProjectTabs)]
fn project_tabs() -> Html {
    let selected = use_state(|| 0usize);
    let tabs = PROJECTS.iter().enumerate().map(|(i, (name, _))| {
        let border = if *selected == i { "#58a6ff" } else { "#30363d" };
        let selected = selected.clone();
        let onclick = Callback::from(move |_| selected.set(i));
        html! {
            <div role="tab" {onclick} style={format!("padding:6px 12px; border-bottom:2px solid {border};")}>{ *name }</div>
        }
    });
    html! {
        <section id="projects">
            <h2>{"Projects"}</h2>
            <div style="display:flex; gap:8px;">{ for tabs }</div>
            <p style="opacity:0.8;">{ PROJECTS[*selected].1 }</p>
        </section>
    }
}

#[function_component(ContactForm)]
fn contact_form() -> Html {
    let email = use_state(String::new);
    let message = use_state(String::new);
    let sent = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            message.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };
    let on_submit = {
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            sent.set(true);
        })
    };

    let ready = email.contains('@') && !message.trim().is_empty();
    html! {
        <section id="contact">
            <h2>{"Contact"}</h2>
            if *sent {
                <p>{"Thanks, I'll get back to you."}</p>
            } else {
                <form onsubmit={on_submit} style="display:flex; flex-direction:column; gap:10px;">
                    <input type="email" placeholder="you@example.com" value={(*email).clone()} oninput={on_email} />
                    <textarea rows="4" placeholder="Message" value={(*message).clone()} oninput={on_message} />
                    <button type="submit" disabled={!ready}>{"Send"}</button>
                </form>
            }
        </section>
    }
}
