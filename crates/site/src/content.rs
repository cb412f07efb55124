//! Static portfolio content served into desktop windows.
//!
//! Markup here is intentionally plain HTML; the compositor treats it as an
//! opaque blob and projects it into the window body once loaded.

use content_contract::{SharedContentLoader, StaticContentLoader};
use std::rc::Rc;

const ABOUT_HTML: &str = r#"
<h1>Hi, I'm Justin</h1>
<p>I build data platforms and the occasional odd website, like this one.</p>
<p>This desktop is a small operating-system shell: drag the windows around,
rearrange the icons, and poke at the dock.</p>
"#;

const PROJECTS_HTML: &str = r#"
<h1>Projects</h1>
<ul>
  <li><strong>Pipeline Atlas</strong> — lineage visualization for warehouse jobs.</li>
  <li><strong>Shelfware</strong> — a home inventory tracker that actually got used.</li>
  <li><strong>This site</strong> — a desktop compositor in the browser.</li>
</ul>
"#;

const RESUME_HTML: &str = r#"
<h1>Resume</h1>
<h2>Experience</h2>
<p>Senior data engineer; before that, analytics and a stint in consulting.</p>
<h2>Tools</h2>
<p>SQL, Rust, Python, and whatever the job needs.</p>
"#;

const CONTACT_HTML: &str = r#"
<h1>Contact</h1>
<p>Email is best. Social links live in the footer of every page.</p>
"#;

const ROI_CALCULATOR_HTML: &str = r#"
<h1>ROI Calculator</h1>
<p>Back-of-the-envelope value modeling for data projects.</p>
<form class="roi-form">
  <label>Annual cost <input type="number" name="cost" value="10000" /></label>
  <label>Annual benefit <input type="number" name="benefit" value="25000" /></label>
  <output name="roi">ROI: 150%</output>
</form>
"#;

const TRIVIA_HTML: &str = r#"
<h1>Trivia</h1>
<p>A few questions about data, computing history, and this site.</p>
<p>First one: what year did the first graphical desktop ship?</p>
"#;

const SETTINGS_HTML: &str = r#"
<h1>Settings</h1>
<p>Wallpaper can be changed from the menu bar. Icon positions and the chosen
wallpaper are remembered between visits.</p>
"#;

/// Builds the loader serving every configured application's markup.
pub fn portfolio_loader() -> SharedContentLoader {
    Rc::new(StaticContentLoader::new(vec![
        ("about".to_string(), ABOUT_HTML.to_string()),
        ("projects".to_string(), PROJECTS_HTML.to_string()),
        ("resume".to_string(), RESUME_HTML.to_string()),
        ("contact".to_string(), CONTACT_HTML.to_string()),
        ("roi-calculator".to_string(), ROI_CALCULATOR_HTML.to_string()),
        ("trivia".to_string(), TRIVIA_HTML.to_string()),
        ("settings".to_string(), SETTINGS_HTML.to_string()),
    ]))
}
