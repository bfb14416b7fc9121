use std::thread;

use satchel::channel::channel;

fn main() {
    let (sender, receiver) = channel();

    let producer = thread::spawn(move || {
        for i in 0..10 {
            sender.send(i * i);
        }
        // Dropping the sender closes the channel.
    });

    while let Some(square) = receiver.recv() {
        println!("{square}");
    }

    producer.join().unwrap();
}
