//! Media query presets.

use crate::models::Preset;

pub(super) const PRESETS: &[Preset] = &[
    Preset {
        name: "Mobile First",
        description: "A mobile-first responsive layout.",
        markup: r#"<div class="mobile-first-layout">
  <header>Header</header>
  <nav>Navigation</nav>
  <main>Main Content</main>
  <aside>Sidebar</aside>
  <footer>Footer</footer>
</div>"#,
        stylesheet: r#".mobile-first-layout {
  display: flex;
  flex-direction: column;
  min-height: 400px;
}

.mobile-first-layout > * {
  padding: 1rem;
  margin-bottom: 0.5rem;
  background-color: var(--secondary-background);
}

@media (min-width: 768px) {
  .mobile-first-layout {
    flex-direction: row;
    flex-wrap: wrap;
  }

  .mobile-first-layout header,
  .mobile-first-layout footer {
    width: 100%;
  }

  .mobile-first-layout nav,
  .mobile-first-layout aside {
    flex: 1;
  }

  .mobile-first-layout main {
    flex: 2;
  }
}"#,
    },
    Preset {
        name: "Desktop First",
        description: "A desktop-first responsive layout.",
        markup: r#"<div class="desktop-first-layout">
  <header>Header</header>
  <div class="content">
    <main>Main Content</main>
    <aside>Sidebar</aside>
  </div>
  <footer>Footer</footer>
</div>"#,
        stylesheet: r#".desktop-first-layout {
  display: flex;
  flex-direction: column;
  min-height: 400px;
}

.desktop-first-layout > * {
  padding: 1rem;
}

.desktop-first-layout header,
.desktop-first-layout footer {
  background-color: var(--secondary-background);
}

.desktop-first-layout .content {
  display: flex;
  flex: 1;
}

.desktop-first-layout main {
  flex: 3;
  background-color: var(--background-color);
}

.desktop-first-layout aside {
  flex: 1;
  background-color: var(--card-background);
}

@media (max-width: 768px) {
  .desktop-first-layout .content {
    flex-direction: column;
  }

  .desktop-first-layout aside {
    order: -1;
  }
}"#,
    },
    Preset {
        name: "Print Friendly",
        description: "A layout optimized for both screen and print.",
        markup: r#"<div class="print-friendly-layout">
  <header>
    <h2>Print Friendly Layout</h2>
  </header>
  <main>
    <article>
      <h3>Main Article</h3>
      <p>This is the main content of the page.</p>
    </article>
  </main>
  <footer>
    <p>Page 1 of 1</p>
  </footer>
</div>"#,
        stylesheet: r#".print-friendly-layout {
  font-family: serif;
  line-height: 1.5;
  padding: 1rem;
  background-color: white;
  color: black;
  min-height: 400px;
}

.print-friendly-layout header,
.print-friendly-layout footer {
  text-align: center;
  margin: 1rem 0;
  border-top: 1px solid #ccc;
  border-bottom: 1px solid #ccc;
  padding: 0.5rem 0;
}

.print-friendly-layout main {
  margin: 1rem 0;
}

@media print {
  .print-friendly-layout {
    font-size: 12pt;
  }
}

@media screen {
  .print-friendly-layout {
    max-width: 800px;
    margin: 0 auto;
    box-shadow: 0 0 10px rgba(0,0,0,0.1);
  }
}"#,
    },
    Preset {
        name: "Responsive Image Gallery",
        description: "A responsive image gallery with different layouts for various screen sizes.",
        markup: r#"<div class="responsive-gallery">
  <div class="gallery-item">Image 1</div>
  <div class="gallery-item">Image 2</div>
  <div class="gallery-item">Image 3</div>
  <div class="gallery-item">Image 4</div>
  <div class="gallery-item">Image 5</div>
  <div class="gallery-item">Image 6</div>
</div>"#,
        stylesheet: r#".responsive-gallery {
  display: grid;
  gap: 1rem;
  padding: 1rem;
  background-color: var(--background-color);
}

.gallery-item {
  background-color: var(--secondary-background);
  padding: 1rem;
  text-align: center;
  border-radius: 8px;
}

@media (min-width: 600px) {
  .responsive-gallery {
    grid-template-columns: repeat(2, 1fr);
  }
}

@media (min-width: 900px) {
  .responsive-gallery {
    grid-template-columns: repeat(3, 1fr);
  }
}

@media (min-width: 1200px) {
  .responsive-gallery {
    grid-template-columns: repeat(4, 1fr);
  }
}"#,
    },
    Preset {
        name: "Responsive Navbar",
        description: "A responsive navbar that transforms into a hamburger menu on smaller screens.",
        markup: r##"<nav class="responsive-navbar">
  <div class="brand">Brand</div>
  <input type="checkbox" id="nav-toggle" class="nav-toggle">
  <label for="nav-toggle" class="nav-toggle-label">
    <span></span>
  </label>
  <ul class="nav-links">
    <li><a href="#">Home</a></li>
    <li><a href="#">About</a></li>
    <li><a href="#">Services</a></li>
    <li><a href="#">Contact</a></li>
  </ul>
</nav>"##,
        stylesheet: r#".responsive-navbar {
  background-color: var(--secondary-background);
  padding: 1rem;
  position: relative;
}

.brand {
  font-size: 1.5rem;
  font-weight: bold;
}

.nav-toggle {
  display: none;
}

.nav-toggle-label {
  display: none;
  position: absolute;
  top: 0;
  right: 0;
  margin-right: 1rem;
  height: 100%;
  display: flex;
  align-items: center;
}

.nav-toggle-label span,
.nav-toggle-label span::before,
.nav-toggle-label span::after {
  display: block;
  background: white;
  height: 2px;
  width: 2rem;
  position: relative;
}

.nav-toggle-label span::before,
.nav-toggle-label span::after {
  content: '';
  position: absolute;
}

.nav-toggle-label span::before {
  bottom: 7px;
}

.nav-toggle-label span::after {
  top: 7px;
}

.nav-links {
  display: flex;
  margin: 0;
  padding: 0;
  list-style: none;
}

.nav-links li {
  margin-left: 1rem;
}

@media screen and (max-width: 768px) {
  .nav-toggle-label {
    display: flex;
  }

  .nav-links {
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    background-color: var(--secondary-background);
    display: none;
    flex-direction: column;
    padding: 1rem;
  }

  .nav-links li {
    margin: 0.5rem 0;
  }

  .nav-toggle:checked ~ .nav-links {
    display: flex;
  }
}"#,
    },
    Preset {
        name: "Responsive Grid-Flex Hybrid",
        description: "A layout that combines grid and flexbox, adapting to different screen sizes.",
        markup: r#"<div class="hybrid-layout">
  <header>Header</header>
  <div class="content">
    <main>Main Content</main>
    <aside>Sidebar</aside>
  </div>
  <footer>Footer</footer>
</div>"#,
        stylesheet: r#".hybrid-layout {
  display: grid;
  grid-template-rows: auto 1fr auto;
  min-height: 400px;
  background-color: var(--background-color);
}

.hybrid-layout > * {
  padding: 1rem;
}

header, footer {
  background-color: var(--secondary-background);
}

.content {
  display: flex;
  flex-wrap: wrap;
}

main {
  flex: 2;
  min-width: 60%;
  background-color: var(--card-background);
}

aside {
  flex: 1;
  min-width: 200px;
  background-color: var(--card-background);
}

@media (max-width: 768px) {
  .content {
    flex-direction: column;
  }

  aside {
    order: -1;
  }
}"#,
    },
];
