//! Global CSS styles for termfolio.
//!
//! Dark developer-terminal aesthetic: near-black backgrounds, gray chrome,
//! mono type, signal colors reserved for status.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* VOID (Backgrounds) */
  --void-black: #000000;
  --void-panel: #0d1117;
  --void-panel-soft: rgba(17, 24, 39, 0.3);
  --void-border: #1f2937;
  --void-border-soft: rgba(31, 41, 55, 0.5);

  /* STATUS */
  --green: #4ade80;
  --red: #f87171;
  --yellow: #eab308;

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: #9ca3af;
  --text-muted: #6b7280;

  /* SKELETON */
  --skeleton-gray: #4b5563;

  /* Typography */
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 2.75rem;

  /* Marquee */
  --marquee-gap: 1rem;
  --marquee-duration: 40s;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-mono);
  background: var(--void-black);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

button {
  font-family: inherit;
  background: none;
  border: none;
  color: inherit;
  cursor: pointer;
}

a {
  color: inherit;
  text-decoration: none;
}

img {
  display: block;
  max-width: 100%;
}

/* === Layout === */
.container {
  width: 100%;
  max-width: 1100px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.page {
  min-height: 100vh;
}

.section {
  padding: 7rem 0;
}

.section.hero {
  padding-top: 11rem;
  min-height: 100vh;
}

.section-alt {
  background: var(--void-panel-soft);
}

.grid-2 {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 3rem;
  align-items: start;
}

.section-intro {
  margin-bottom: 4rem;
}

.section-title {
  font-size: var(--text-2xl);
  font-weight: 500;
  margin-bottom: 1.5rem;
}

.section-blurb {
  color: var(--text-secondary);
  max-width: 42rem;
}

/* === Splash === */
.splash {
  position: fixed;
  inset: 0;
  background: var(--void-black);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 50;
}

.splash-inner {
  text-align: center;
}

.splash-spinner {
  width: 2rem;
  height: 2rem;
  margin: 0 auto 2rem;
  border: 1px solid var(--text-primary);
  border-top-color: transparent;
  animation: spin 2s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.splash-word {
  display: flex;
  gap: 0.5rem;
  justify-content: center;
  font-size: var(--text-sm);
  letter-spacing: 0.3em;
}

.splash-letter {
  opacity: 0;
  animation: fade-in var(--transition-normal) forwards;
}

@keyframes fade-in {
  to { opacity: 1; }
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 40;
  background: rgba(0, 0, 0, 0.95);
  backdrop-filter: blur(4px);
  border-bottom: 1px solid var(--void-border);
}

.statusbar {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 0.5rem 0;
  font-size: var(--text-xs);
  color: var(--text-secondary);
  border-bottom: 1px solid var(--void-border-soft);
}

.statusbar-group {
  display: flex;
  align-items: center;
  gap: 1.5rem;
}

.statusbar-badge {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

/* === Status Light === */
.status-light {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.status-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 9999px;
}

.status-dot--online {
  background: var(--green);
}

.status-dot--offline {
  background: var(--red);
}

.status-light-label {
  letter-spacing: 0.05em;
}

/* === Main nav row === */
.navbar-main {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1rem 0;
}

.nav-identity-row {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.traffic-lights {
  display: flex;
  gap: 0.25rem;
}

.traffic-light {
  width: 0.75rem;
  height: 0.75rem;
  border-radius: 9999px;
}

.traffic-light--red { background: #ef4444; }
.traffic-light--yellow { background: var(--yellow); }
.traffic-light--green { background: #22c55e; }

.nav-prompt {
  color: var(--green);
  font-size: var(--text-sm);
}

.nav-prompt-path {
  color: var(--text-secondary);
}

.prompt-cursor {
  margin-left: 0.25rem;
  animation: blink 1s step-end infinite;
}

@keyframes blink {
  50% { opacity: 0; }
}

.nav-identity-sub {
  font-size: var(--text-xs);
  color: var(--text-muted);
  margin-top: 0.25rem;
  margin-left: 3rem;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 2rem;
}

.nav-item {
  position: relative;
}

.nav-item-entry {
  color: #d1d5db;
  font-size: var(--text-sm);
  transition: color var(--transition-fast);
}

.nav-item:hover .nav-item-entry {
  color: var(--text-primary);
}

.nav-item-hint {
  position: absolute;
  top: 100%;
  left: 0;
  margin-top: 0.5rem;
  opacity: 0;
  transition: opacity var(--transition-fast);
  font-size: var(--text-xs);
  color: var(--green);
  white-space: nowrap;
  pointer-events: none;
}

.nav-item:hover .nav-item-hint {
  opacity: 1;
}

.nav-tools {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.5rem;
  color: var(--text-secondary);
  transition: color var(--transition-fast), border-color var(--transition-fast);
}

.terminal-toggle {
  border: 1px solid #374151;
}

.terminal-toggle:hover {
  border-color: var(--text-muted);
  color: var(--text-primary);
}

.nav-socials {
  display: flex;
  gap: 0.75rem;
}

.social-link {
  position: relative;
  display: inline-flex;
  padding: 0.5rem;
  color: var(--text-secondary);
  transition: color var(--transition-fast), background var(--transition-fast);
}

.social-link:hover {
  color: var(--text-primary);
  background: var(--void-panel);
}

.social-tooltip {
  position: absolute;
  top: 100%;
  left: 50%;
  transform: translateX(-50%);
  margin-top: 0.5rem;
  opacity: 0;
  transition: opacity var(--transition-fast);
  font-size: var(--text-xs);
  color: var(--text-secondary);
  white-space: nowrap;
  pointer-events: none;
}

.social-link:hover .social-tooltip {
  opacity: 1;
}

/* === Terminal panel === */
.terminal-panel {
  border-top: 1px solid var(--void-border);
  background: rgba(13, 17, 23, 0.5);
  padding: 1rem 0;
  font-size: var(--text-sm);
  animation: panel-open var(--transition-normal);
  overflow: hidden;
}

@keyframes panel-open {
  from { opacity: 0; transform: translateY(-0.5rem); }
  to { opacity: 1; transform: translateY(0); }
}

.terminal-prompt-line {
  color: var(--green);
  margin-bottom: 0.5rem;
}

.terminal-history {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  font-size: var(--text-xs);
  color: #d1d5db;
}

.terminal-line {
  opacity: 0;
  animation: line-in var(--transition-normal) forwards;
  transition: color var(--transition-fast);
}

.terminal-line:hover {
  color: var(--text-primary);
}

@keyframes line-in {
  from { opacity: 0; transform: translateX(-0.5rem); }
  to { opacity: 1; transform: translateX(0); }
}

.terminal-dollar {
  color: var(--green);
}

/* === Hero === */
.hero-title {
  font-size: var(--text-3xl);
  font-weight: 500;
  line-height: 1.2;
  margin-bottom: 2.5rem;
}

.hero-blurb {
  color: var(--text-secondary);
  font-size: var(--text-lg);
  max-width: 32rem;
  margin-bottom: 4rem;
}

.hero-actions {
  display: flex;
  gap: 1rem;
  flex-wrap: wrap;
}

.hero-card-wrap {
  display: flex;
  justify-content: flex-end;
}

.hero-card {
  width: 20rem;
  height: 20rem;
  border: 1px solid #374151;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
}

.hero-monogram {
  width: 6rem;
  height: 6rem;
  border: 1px solid var(--skeleton-gray);
  border-radius: 9999px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: var(--text-xl);
  margin-bottom: 1rem;
}

.hero-name {
  font-size: var(--text-lg);
  font-weight: 500;
}

.hero-role {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  letter-spacing: 0.1em;
}

/* === Buttons === */
.btn-primary,
.btn-secondary {
  display: inline-flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.875rem 1.75rem;
  font-size: var(--text-sm);
  transition: transform var(--transition-fast), background var(--transition-fast),
    color var(--transition-fast);
}

.btn-primary {
  background: var(--text-primary);
  color: var(--void-black);
}

.btn-primary:hover {
  transform: scale(1.02);
}

.btn-secondary {
  border: 1px solid #374151;
  color: var(--text-primary);
}

.btn-secondary:hover {
  border-color: var(--text-muted);
  transform: scale(1.02);
}

.btn-ghost {
  color: var(--text-secondary);
  padding: 0.5rem 1rem;
}

.btn-ghost:hover {
  color: var(--text-primary);
}

/* === Education === */
.edu-card {
  border: 1px solid #374151;
  border-radius: 0.5rem;
  padding: 2rem;
  background: var(--void-panel-soft);
  transition: background var(--transition-normal);
}

.edu-card:hover {
  background: rgba(17, 24, 39, 0.4);
}

.edu-card-head {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-bottom: 1.5rem;
}

.edu-logo {
  height: 3rem;
  width: 8rem;
  object-fit: contain;
  object-position: left;
  flex-shrink: 0;
}

.edu-institution {
  font-size: var(--text-xl);
  font-weight: 500;
}

.edu-card-body {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.edu-degree {
  color: #d1d5db;
  font-size: var(--text-lg);
}

.edu-years {
  color: var(--text-muted);
}

/* === Languages grid === */
.language-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 2.5rem;
  margin-bottom: 5rem;
}

.language-card {
  border: 1px solid #374151;
  border-radius: 0.5rem;
  background: var(--void-panel-soft);
  padding: 1rem;
  display: flex;
  justify-content: center;
  transition: background var(--transition-normal);
}

.language-card:hover {
  background: rgba(17, 24, 39, 0.4);
}

/* === Marquee === */
.marquee-stack {
  display: flex;
  flex-direction: column;
  gap: 3rem;
}

.marquee {
  display: flex;
  overflow: hidden;
  padding: 0.5rem;
  gap: var(--marquee-gap);
}

.marquee--vertical {
  flex-direction: column;
}

.marquee-panel {
  border-radius: 0.75rem;
  background: var(--void-panel-soft);
  backdrop-filter: blur(4px);
  border: 1px solid var(--void-border-soft);
  padding: 1.5rem 0.5rem;
}

.marquee-copy {
  display: flex;
  flex-shrink: 0;
  justify-content: space-around;
  gap: var(--marquee-gap);
  transition: opacity var(--transition-normal);
}

.marquee-copy--row {
  flex-direction: row;
}

.marquee-copy--column {
  flex-direction: column;
}

.marquee-anim-left {
  animation: marquee-left var(--marquee-duration) linear infinite;
}

.marquee-anim-right {
  animation: marquee-right var(--marquee-duration) linear infinite;
}

.marquee-anim-up {
  animation: marquee-up var(--marquee-duration) linear infinite;
}

.marquee-anim-down {
  animation: marquee-down var(--marquee-duration) linear infinite;
}

.marquee:hover .marquee-pause-hover {
  animation-play-state: paused;
}

@keyframes marquee-left {
  from { transform: translateX(0); }
  to { transform: translateX(calc(-100% - var(--marquee-gap))); }
}

@keyframes marquee-right {
  from { transform: translateX(calc(-100% - var(--marquee-gap))); }
  to { transform: translateX(0); }
}

@keyframes marquee-up {
  from { transform: translateY(0); }
  to { transform: translateY(calc(-100% - var(--marquee-gap))); }
}

@keyframes marquee-down {
  from { transform: translateY(calc(-100% - var(--marquee-gap))); }
  to { transform: translateY(0); }
}

/* === Icon tiles === */
.icon-tile {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
  margin: 0 1rem;
  min-width: 120px;
  height: 100px;
  border: 1px solid #374151;
  border-radius: 0.75rem;
  background: rgba(0, 0, 0, 0.4);
  backdrop-filter: blur(4px);
  transition: border-color var(--transition-normal), background var(--transition-normal);
}

.icon-tile:hover {
  border-color: var(--text-muted);
  background: rgba(255, 255, 255, 0.05);
}

.icon-tile-img {
  width: 1.75rem;
  height: 1.75rem;
  margin-bottom: 0.5rem;
}

.icon-tile-label {
  font-size: var(--text-sm);
  font-weight: 500;
  color: #d1d5db;
  white-space: nowrap;
}

.icon-tile-label--muted {
  font-size: var(--text-xs);
  color: var(--text-muted);
  margin-top: 0.5rem;
}

.icon-fallback-glyph {
  width: 1.75rem;
  height: 1.75rem;
  background: var(--text-muted);
  border-radius: 0.25rem;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: var(--text-xs);
  color: var(--void-black);
}

/* === Skeletons === */
.skeleton-block {
  background: var(--skeleton-gray);
  border-radius: 0.25rem;
}

.skeleton-block--glyph {
  width: 1.75rem;
  height: 1.75rem;
  margin-bottom: 0.5rem;
}

.skeleton-block--label {
  width: 4rem;
  height: 0.75rem;
}

.skeleton-block--line {
  width: 100%;
  height: 0.75rem;
}

.skeleton-pulse {
  animation: pulse 2s ease-in-out infinite;
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.4; }
}

/* === Connect === */
.contact-details {
  display: flex;
  flex-direction: column;
  gap: 2rem;
  margin: 3rem 0 4rem;
}

.contact-row {
  display: flex;
  align-items: center;
  gap: 1rem;
  color: var(--text-primary);
  font-size: var(--text-base);
  text-align: left;
}

.contact-row svg {
  color: var(--text-secondary);
}

.copied-note {
  font-size: var(--text-xs);
  color: var(--green);
}

.contact-links {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  margin-bottom: 3rem;
}

.contact-link {
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.contact-link:hover {
  color: var(--text-primary);
}

.qr-card {
  display: inline-flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  border: 1px solid #374151;
  border-radius: 0.5rem;
  padding: 1.25rem;
  background: var(--void-panel-soft);
}

.qr-card-label {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.qr-card-fallback-text {
  font-size: var(--text-xs);
  color: var(--text-secondary);
  word-break: break-all;
}

/* === Contact form === */
.contact-form {
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 2rem;
}

.form-input,
.form-textarea {
  width: 100%;
  background: transparent;
  border: none;
  border-bottom: 1px solid #374151;
  padding: 0.75rem 0;
  color: var(--text-primary);
  font-family: inherit;
  font-size: var(--text-base);
  transition: border-color var(--transition-fast);
}

.form-input:focus,
.form-textarea:focus {
  outline: none;
  border-bottom-color: var(--text-secondary);
}

.form-textarea {
  min-height: 7rem;
  resize: vertical;
}

/* === Footer === */
.footer {
  padding: 3rem 0;
  border-top: 1px solid var(--void-border);
  text-align: center;
}

.footer-note {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

/* === Responsive === */
@media (max-width: 768px) {
  .grid-2 {
    grid-template-columns: 1fr;
  }

  .nav-links {
    display: none;
  }

  .nav-identity-sub {
    display: none;
  }

  .form-row {
    grid-template-columns: 1fr;
  }

  .language-grid {
    grid-template-columns: 1fr;
  }

  .hero-card-wrap {
    justify-content: center;
  }
}
"#;
