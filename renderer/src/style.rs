/// Inline stylesheet embedded in every generated document.
pub const STYLE: &str = r#"    body {
      font-family: sans-serif;
      background-color: #000000;
      color: #e0e0e0;
      margin: 1em;
      max-width: 600px;
      margin-left: auto;
      margin-right: auto;
    }
    a { color:rgb(255, 166, 0); }
    h1, h2 { color: #ffffff; font-family: bahnschrift; }
    h1 { text-align: center; }
    h2 { margin-top: 2.5em; }
    .verse, .chorus { margin: 1em 0; }
    .verse-number { font-weight: bold; display: inline-block; width: auto; margin-bottom: 0.2em; color: #000000; background-color: rgb(255, 255, 255); padding: 0.2em; border-radius: 0.3em;}
    .chorus .label { font-weight: bold; color: #000000; background-color: rgb(255, 166, 0); padding: 0.2em; border-radius: 0.3em; }
    .chord {
      color: rgb(255, 166, 0);
      font-weight: bold;
      display: inline-block;
      min-width: 2.5em;
      text-align: center;
    }
    .song-line {
      font-family: monospace;
      white-space: pre;
      margin: 0.3em 0;
    }
    .index a {
      text-decoration: none;
      display: block;
      margin: 0.2em 0;
    }
    .song {
      padding-bottom: 2em;
      border-bottom: 1px solid #222;
    }
    .back-to-top {
      margin-top: 1em;
      text-align: right;
      font-size: 0.9em;
    }
    .back-to-top a {
        color: #000000;
        background-color: rgb(255, 166, 0);
        padding: 0.5em;
        border-radius: 0.3em;
        text-decoration: none;
        font-family: bahnschrift;
    }
    .download-links {
      text-align: center;
      color:rgb(76, 76, 76);
    }
    .download-links a {
      color:rgb(76, 76, 76);
      text-decoration: none;
    }
    @media (max-width: 600px) {
      body { font-size: 16px; padding: 0.5em; }
      .chord { min-width: 2em; }
    }"#;
