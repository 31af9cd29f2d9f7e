//! Flexbox presets.

use crate::models::Preset;

pub(super) const PRESETS: &[Preset] = &[
    Preset {
        name: "Holy Grail",
        description: "A classic layout with header, footer, and three columns.",
        markup: r#"<div class="holy-grail-layout">
  <header>Header</header>
  <div class="holy-grail-body">
    <nav>Navigation</nav>
    <main>Main Content</main>
    <aside>Sidebar</aside>
  </div>
  <footer>Footer</footer>
</div>"#,
        stylesheet: r#".holy-grail-layout {
  display: flex;
  flex-direction: column;
  min-height: 400px;
}

.holy-grail-layout header,
.holy-grail-layout footer {
  background-color: var(--secondary-background);
  padding: 1rem;
}

.holy-grail-body {
  display: flex;
  flex: 1;
}

.holy-grail-body nav,
.holy-grail-body aside {
  background-color: var(--card-background);
  padding: 1rem;
  width: 150px;
}

.holy-grail-body main {
  flex: 1;
  padding: 1rem;
  background-color: var(--background-color);
}"#,
    },
    Preset {
        name: "Card Layout",
        description: "A responsive card layout using flexbox.",
        markup: r#"<div class="card-layout">
  <div class="card">Card 1</div>
  <div class="card">Card 2</div>
  <div class="card">Card 3</div>
  <div class="card">Card 4</div>
</div>"#,
        stylesheet: r#".card-layout {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  justify-content: center;
}

.card {
  flex: 1 1 200px;
  max-width: 250px;
  background-color: var(--secondary-background);
  padding: 1rem;
  border-radius: 4px;
  text-align: center;
}"#,
    },
    Preset {
        name: "Centered Content",
        description: "A layout with vertically and horizontally centered content.",
        markup: r#"<div class="centered-content">
  <div class="content">
    <h2>Centered Content</h2>
    <p>This content is centered both vertically and horizontally.</p>
  </div>
</div>"#,
        stylesheet: r#".centered-content {
  display: flex;
  justify-content: center;
  align-items: center;
  height: 400px;
  background-color: var(--background-color);
}

.content {
  text-align: center;
  padding: 2rem;
  background-color: var(--secondary-background);
  border-radius: 4px;
  max-width: 80%;
}"#,
    },
    Preset {
        name: "Sticky Footer",
        description: "A layout with a footer that sticks to the bottom of the page.",
        markup: r#"<div class="sticky-footer-layout">
  <header>Header</header>
  <main>Main Content</main>
  <footer>Footer</footer>
</div>"#,
        stylesheet: r#".sticky-footer-layout {
  display: flex;
  flex-direction: column;
  min-height: 400px;
}

.sticky-footer-layout header,
.sticky-footer-layout footer {
  background-color: var(--secondary-background);
  padding: 1rem;
}

.sticky-footer-layout main {
  flex: 1;
  padding: 1rem;
  background-color: var(--background-color);
}"#,
    },
    Preset {
        name: "Masonry Layout",
        description: "A Pinterest-style masonry layout using flexbox.",
        markup: r#"<div class="masonry-layout">
  <div class="masonry-item">Item 1</div>
  <div class="masonry-item">Item 2</div>
  <div class="masonry-item">Item 3</div>
  <div class="masonry-item">Item 4</div>
  <div class="masonry-item">Item 5</div>
  <div class="masonry-item">Item 6</div>
</div>"#,
        stylesheet: r#".masonry-layout {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
}

.masonry-item {
  flex: 1 0 calc(33.333% - 1rem);
  background-color: var(--secondary-background);
  padding: 1rem;
  min-height: 100px;
}

.masonry-item:nth-child(2n) {
  min-height: 150px;
}

.masonry-item:nth-child(3n) {
  min-height: 200px;
}"#,
    },
    Preset {
        name: "Navbar with Dropdown",
        description: "A responsive navbar with a dropdown menu using flexbox.",
        markup: r##"<nav class="navbar">
  <div class="brand">Brand</div>
  <ul class="nav-links">
    <li><a href="#">Home</a></li>
    <li><a href="#">About</a></li>
    <li class="dropdown">
      <a href="#" class="dropbtn">Services</a>
      <div class="dropdown-content">
        <a href="#">Service 1</a>
        <a href="#">Service 2</a>
        <a href="#">Service 3</a>
      </div>
    </li>
    <li><a href="#">Contact</a></li>
  </ul>
</nav>"##,
        stylesheet: r#".navbar {
  display: flex;
  justify-content: space-between;
  align-items: center;
  background-color: var(--secondary-background);
  padding: 1rem;
}

.brand {
  font-size: 1.5rem;
  font-weight: bold;
}

.nav-links {
  display: flex;
  list-style: none;
  margin: 0;
  padding: 0;
}

.nav-links li {
  margin-left: 1rem;
}

.dropdown {
  position: relative;
}

.dropdown-content {
  display: none;
  position: absolute;
  background-color: var(--card-background);
  min-width: 120px;
  box-shadow: 0 8px 16px rgba(0,0,0,0.2);
  z-index: 1;
}

.dropdown-content a {
  display: block;
  padding: 0.5rem;
}

.dropdown:hover .dropdown-content {
  display: block;
}"#,
    },
];
