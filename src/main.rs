use scriptvoice_rust::audio::create_timestamps;
use scriptvoice_rust::{is_script_format, parse_script, Conf};
use std::env;
use std::fs;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: {} <text_file>", args[0]);
        return;
    }

    let file_path = &args[1];
    let conf = Conf::default();

    match fs::read(file_path) {
        Ok(bytes) => {
            let content = match scriptvoice_rust::services::extract_text(&bytes, file_path) {
                Ok(text) => text,
                Err(e) => {
                    println!("文本抽取失败: {}", e);
                    return;
                }
            };

            let script_detected = is_script_format(&content);
            let result = parse_script(&content);
            let timestamps = create_timestamps(&content, conf.words_per_minute);

            println!("解析完成！");
            println!("解析时间: {}ms", result.parse_time);
            println!("剧本格式: {}", if script_detected { "是" } else { "否" });
            println!("行数量: {}", result.lines.len());
            println!("角色数量: {}", result.characters.len());
            for character in &result.characters {
                println!("- {} ({} 条台词)", character.name, character.line_count());
            }
            println!("时间戳数量: {}", timestamps.len());
            if let Some(last) = timestamps.last() {
                println!("预估总时长: {:.1}秒", last.time);
            }

            match serde_json::to_string_pretty(&result) {
                Ok(json) => {
                    let json_path = format!("{}.json", file_path);
                    if fs::write(&json_path, json).is_ok() {
                        println!("解析结果已保存到: {}", json_path);
                    }
                }
                Err(e) => println!("序列化失败: {}", e),
            }
        }
        Err(e) => {
            println!("读取文件失败: {}", e);
        }
    }
}
